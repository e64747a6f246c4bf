/// Chainable setters for the optional fields of an endpoint payload.
macro_rules! optional_setters {
    ($ty:ty { $($field:ident: $val:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[inline]
                pub fn $field(mut self, v: impl Into<$val>) -> Self {
                    self.$field = Some(v.into());
                    self
                }
            )*
        }
    };
}
