use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Sanitizes a migration name: lowercase, spaces and dashes to underscores,
/// strip anything else that is not alphanumeric, collapse consecutive
/// underscores and trim leading/trailing ones. Returns an empty string when
/// nothing alphanumeric survives; callers fall back to a timestamp-derived
/// name in that case.
pub fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .to_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    sanitized
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_case_and_separators() {
        assert_eq!(sanitize_name("Add Users"), "add_users");
        assert_eq!(sanitize_name("Test-Name"), "test_name");
    }

    #[test]
    fn sanitizes_special_characters() {
        assert_eq!(sanitize_name("add@users!"), "addusers");
        assert_eq!(sanitize_name("   spaces   "), "spaces");
        assert_eq!(sanitize_name("multiple---dashes"), "multiple_dashes");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(sanitize_name("!!!"), "");
        assert_eq!(sanitize_name(""), "");
    }
}
