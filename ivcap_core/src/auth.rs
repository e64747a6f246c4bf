use crate::secret::SecretString;
use http::HeaderValue;

/// Renders the `Authorization` value for a JWT.
///
/// A credential that already contains a space carries its own scheme
/// (`"Bearer xyz"`, `"Basic ..."`) and is passed through verbatim; a bare
/// token gets `Bearer ` prepended. Returns `None` when the result is not a
/// valid header value.
pub fn authorization_value(jwt: &SecretString) -> Option<HeaderValue> {
    let raw = jwt.expose();
    let mut value = if raw.contains(' ') {
        HeaderValue::from_str(raw).ok()?
    } else {
        HeaderValue::from_str(&format!("Bearer {}", raw)).ok()?
    };
    value.set_sensitive(true);
    Some(value)
}
