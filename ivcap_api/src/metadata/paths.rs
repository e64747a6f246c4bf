use ivcap_core::prelude::UrlPath;

const ROOT: &str = "1/metadata";

/// Records attached to `entity_id`.
pub fn read_metadata_path(entity_id: &str) -> String {
    UrlPath::new().with_raw(ROOT).with_segment(entity_id).into_string()
}

pub fn add_metadata_path(entity_id: &str, schema: &str) -> String {
    UrlPath::new()
        .with_raw(ROOT)
        .with_segment(entity_id)
        .with_segment(schema)
        .into_string()
}

/// `id` names a record, not an entity.
pub fn revoke_metadata_path(id: &str) -> String {
    UrlPath::new().with_raw(ROOT).with_segment(id).into_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn metadata_paths() {
        assert_eq!(
            read_metadata_path("urn:ivcap:artifact:a1"),
            "/1/metadata/urn:ivcap:artifact:a1"
        );
        assert_eq!(
            add_metadata_path("urn:ivcap:artifact:a1", "urn:example:schema:simple-python-service"),
            "/1/metadata/urn:ivcap:artifact:a1/urn:example:schema:simple-python-service"
        );
        assert_eq!(revoke_metadata_path("r1"), "/1/metadata/r1");
    }

    #[test]
    fn schema_with_slashes_stays_one_segment() {
        assert_eq!(
            add_metadata_path("e", "https://schema.example/v1#x"),
            "/1/metadata/e/https:%2F%2Fschema.example%2Fv1%23x"
        );
    }
}
