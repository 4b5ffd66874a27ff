use crate::model::ParsedSchema;
use crate::util::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The persisted cache document: the last-seen schema snapshot plus the time
/// it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedSchema {
    pub timestamp: String,
    pub schema: ParsedSchema,
}

/// On-disk JSON cache of the last-seen schema, used between process
/// invocations as the "old" input to the differ. The cache is advisory: a
/// missing or unreadable document simply means no previous snapshot.
pub struct SchemaCache {
    path: PathBuf,
}

impl SchemaCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SchemaCache { path: path.into() }
    }

    /// Returns the cached snapshot, or None when the cache is absent or
    /// cannot be decoded.
    pub fn load(&self) -> Option<CachedSchema> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Rewrites the cache with a fresh snapshot.
    pub fn store(&self, schema: &ParsedSchema) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SchemaError::IoError(format!("cannot create cache directory: {e}"))
            })?;
        }

        let doc = CachedSchema {
            timestamp: chrono::Utc::now().to_rfc3339(),
            schema: schema.clone(),
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| SchemaError::IoError(format!("cannot encode cache: {e}")))?;

        fs::write(&self.path, json)
            .map_err(|e| SchemaError::IoError(format!("cannot write {}: {e}", self.path.display())))
    }
}
