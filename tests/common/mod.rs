#![allow(unused_imports)]
#![allow(dead_code)]

pub use sqlmold::api::{
    diff_files, generate, list_migrations, DiffOptions, GenerateOptions, ListOptions,
};
pub use sqlmold::cache::SchemaCache;
pub use sqlmold::diff::{compute_diff, Change};
pub use sqlmold::model::{Field, Migration, Model, ParsedSchema};
pub use sqlmold::parser::{parse_schema, parse_schema_file};
pub use sqlmold::store::MigrationStore;
pub use std::fs;
pub use tempfile::TempDir;

/// Writes schema text into the temp dir and returns the file path as a String.
pub fn write_schema(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

pub fn generate_options(dir: &TempDir, schema_path: &str) -> GenerateOptions {
    GenerateOptions::new(schema_path)
        .with_migrations_dir(dir.path().join("migrations").to_string_lossy())
        .with_cache_path(dir.path().join("schema.cache.json").to_string_lossy())
}
