use crate::model::Migration;
use crate::util::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "migration.json";
pub const UP_FILE: &str = "up.sql";
pub const DOWN_FILE: &str = "down.sql";

/// The `migration.json` document. SQL lives in the sibling files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct MigrationMeta {
    id: String,
    name: String,
    timestamp: String,
}

/// Persists migration artifacts under a root directory, one subdirectory per
/// migration:
///
/// ```text
/// <root>/<id>/
///   migration.json
///   up.sql
///   down.sql
/// ```
///
/// Single-writer operation is assumed; concurrent invocations racing on the
/// same root may interleave writes.
pub struct MigrationStore {
    root: PathBuf,
}

impl MigrationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MigrationStore { root: root.into() }
    }

    /// Writes the three artifact files. The metadata file is written last so
    /// a reader never observes it as the sole evidence of a migration. An
    /// already-existing id directory is a collision and is rejected; ids are
    /// never reused.
    pub fn save(&self, migration: &Migration) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| SchemaError::StoreError(format!("cannot create migrations root: {e}")))?;

        let dir = self.root.join(&migration.id);
        if dir.exists() {
            return Err(SchemaError::StoreError(format!(
                "migration id already exists: {}",
                migration.id
            )));
        }
        fs::create_dir(&dir)
            .map_err(|e| SchemaError::StoreError(format!("cannot create {}: {e}", dir.display())))?;

        write_file(&dir.join(UP_FILE), &migration.up_sql)?;
        write_file(&dir.join(DOWN_FILE), &migration.down_sql)?;

        let meta = MigrationMeta {
            id: migration.id.clone(),
            name: migration.name.clone(),
            timestamp: migration.timestamp.clone(),
        };
        let json = serde_json::to_string_pretty(&meta)
            .map_err(|e| SchemaError::StoreError(format!("cannot encode metadata: {e}")))?;
        write_file(&dir.join(METADATA_FILE), &json)?;

        Ok(())
    }

    /// Lists persisted migrations ordered by timestamp ascending. A
    /// subdirectory missing any of the three artifact files, or whose
    /// metadata cannot be decoded, is skipped; listing never aborts because
    /// of one bad entry.
    pub fn list(&self) -> Result<Vec<Migration>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root)
            .map_err(|e| SchemaError::StoreError(format!("cannot read migrations root: {e}")))?;

        let mut migrations: Vec<Migration> = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| SchemaError::StoreError(format!("cannot read entry: {e}")))?;
            if let Some(migration) = read_migration(&entry.path()) {
                migrations.push(migration);
            }
        }

        migrations.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(migrations)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| SchemaError::StoreError(format!("cannot write {}: {e}", path.display())))
}

fn read_migration(dir: &Path) -> Option<Migration> {
    let meta_raw = fs::read_to_string(dir.join(METADATA_FILE)).ok()?;
    let meta: MigrationMeta = serde_json::from_str(&meta_raw).ok()?;
    let up_sql = fs::read_to_string(dir.join(UP_FILE)).ok()?;
    let down_sql = fs::read_to_string(dir.join(DOWN_FILE)).ok()?;

    Some(Migration {
        id: meta.id,
        name: meta.name,
        timestamp: meta.timestamp,
        up_sql,
        down_sql,
    })
}
