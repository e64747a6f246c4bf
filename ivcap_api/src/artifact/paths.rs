use ivcap_core::prelude::UrlPath;

const ROOT: &str = "1/artifacts";

pub fn list_artifact_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

pub fn upload_artifact_path() -> String {
    UrlPath::new().with_raw(ROOT).into_string()
}

pub fn read_artifact_path(id: &str) -> String {
    UrlPath::new().with_raw(ROOT).with_segment(id).into_string()
}

fn collection_path(id: &str, name: &str) -> String {
    UrlPath::new()
        .with_raw(ROOT)
        .with_segment(id)
        .with_raw(".collections")
        .with_segment(name)
        .into_string()
}

pub fn add_collection_artifact_path(id: &str, name: &str) -> String {
    collection_path(id, name)
}

pub fn remove_collection_artifact_path(id: &str, name: &str) -> String {
    collection_path(id, name)
}

fn metadata_path(id: &str, schema: &str) -> String {
    UrlPath::new()
        .with_raw(ROOT)
        .with_segment(id)
        .with_raw(".metadata")
        .with_segment(schema)
        .into_string()
}

pub fn add_metadata_artifact_path(id: &str, schema: &str) -> String {
    metadata_path(id, schema)
}

pub fn remove_metadata_artifact_path(id: &str, schema: &str) -> String {
    metadata_path(id, schema)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn artifact_paths() {
        assert_eq!(list_artifact_path(), "/1/artifacts");
        assert_eq!(upload_artifact_path(), "/1/artifacts");
        assert_eq!(read_artifact_path("abc"), "/1/artifacts/abc");
        assert_eq!(
            add_collection_artifact_path("abc", "coll1"),
            "/1/artifacts/abc/.collections/coll1"
        );
        assert_eq!(
            remove_metadata_artifact_path("urn:ivcap:artifact:1", "urn:schema:a"),
            "/1/artifacts/urn:ivcap:artifact:1/.metadata/urn:schema:a"
        );
    }

    #[test]
    fn caller_data_cannot_add_segments() {
        assert_eq!(read_artifact_path("a/../b"), "/1/artifacts/a%2F..%2Fb");
    }
}
