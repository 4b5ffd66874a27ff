//! High-level API for embedding sqlmold in other applications.
//!
//! This module provides functions that mirror CLI commands with structured
//! inputs and outputs.
//!
//! # Example
//!
//! ```no_run
//! use sqlmold::api::{generate, GenerateOptions};
//!
//! let result = generate(GenerateOptions::new("schema.model")).unwrap();
//!
//! match result.migration {
//!     Some(migration) => println!("created {}", migration.id),
//!     None => println!("no changes detected"),
//! }
//! ```
//!
//! Each call receives its session state (schema path, migrations root, cache
//! location) through the options object; nothing is retained between calls.

mod error;
mod options;
mod results;

pub use error::Error;
pub use options::{DiffOptions, GenerateOptions, ListOptions};
pub use results::{DiffResult, GenerateResult, ListResult};

use crate::cache::SchemaCache;
use crate::diff::compute_diff;
use crate::migrate;
use crate::model::ParsedSchema;
use crate::parser::parse_schema_file;
use crate::store::MigrationStore;

fn load_schema(path: &str) -> Result<ParsedSchema, Error> {
    parse_schema_file(path).map_err(|e| Error::parse(e.to_string()))
}

/// Diff two schema files and return the detected changes.
pub fn diff_files(options: DiffOptions) -> Result<DiffResult, Error> {
    let old = load_schema(&options.from_path)?;
    let new = load_schema(&options.to_path)?;

    let changes = compute_diff(&old, &new);
    let is_empty = changes.is_empty();

    Ok(DiffResult { changes, is_empty })
}

/// Run the full pipeline once: parse the schema, diff it against the cached
/// last-seen snapshot (an absent cache reads as an empty schema, so a first
/// run migrates the whole file), generate and persist a migration, then
/// refresh the cache.
pub fn generate(options: GenerateOptions) -> Result<GenerateResult, Error> {
    let new_schema = load_schema(&options.schema_path)?;

    let cache = SchemaCache::new(&options.cache_path);
    let old_schema = cache
        .load()
        .map(|cached| cached.schema)
        .unwrap_or_default();

    let changes = if old_schema.fingerprint() == new_schema.fingerprint() {
        Vec::new()
    } else {
        compute_diff(&old_schema, &new_schema)
    };

    let store = MigrationStore::new(&options.migrations_dir);
    let migration = migrate::generate(&changes, options.name.as_deref(), &store)
        .map_err(|e| Error::store(e.to_string()))?;

    // The cache only advances after the migration is durable; a failed run
    // leaves the old snapshot in place so the next run re-detects.
    if options.update_cache {
        cache
            .store(&new_schema)
            .map_err(|e| Error::cache(e.to_string()))?;
    }

    Ok(GenerateResult { changes, migration })
}

/// List persisted migrations, timestamp ascending.
pub fn list_migrations(options: ListOptions) -> Result<ListResult, Error> {
    let store = MigrationStore::new(&options.migrations_dir);
    let migrations = store.list().map_err(|e| Error::store(e.to_string()))?;

    Ok(ListResult { migrations })
}
