use ivcap_core::prelude::UrlPath;

const ROOT: &str = "1/services";

pub fn list_service_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

pub fn create_service_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

fn service_path(id: &str) -> String {
    UrlPath::new().with_raw(ROOT).with_segment(id).into_string()
}

pub fn read_service_path(id: &str) -> String {
    service_path(id)
}

pub fn update_service_path(id: &str) -> String {
    service_path(id)
}

pub fn delete_service_path(id: &str) -> String {
    service_path(id)
}
