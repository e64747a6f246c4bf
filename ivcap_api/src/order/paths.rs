use ivcap_core::prelude::UrlPath;

const ROOT: &str = "1/orders";

pub fn list_order_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

pub fn create_order_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

pub fn read_order_path(id: &str) -> String {
    UrlPath::new().with_raw(ROOT).with_segment(id).into_string()
}

pub fn logs_order_path() -> String {
    UrlPath::new().with_raw(ROOT).with_raw("logs").into_string()
}

pub fn top_order_path() -> String {
    UrlPath::new().with_raw(ROOT).with_raw("top").into_string()
}
