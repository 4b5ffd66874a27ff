use crate::diff::Change;
use crate::model::Migration;

/// Result of diffing two schema files.
#[derive(Debug, Clone)]
pub struct DiffResult {
    pub changes: Vec<Change>,
    pub is_empty: bool,
}

/// Result of one generation run. `migration` is None when no changes were
/// detected; that outcome is distinct from an error.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub changes: Vec<Change>,
    pub migration: Option<Migration>,
}

/// Result of listing persisted migrations, timestamp ascending.
#[derive(Debug, Clone)]
pub struct ListResult {
    pub migrations: Vec<Migration>,
}
