//! Convenient re-exports for common sqlmold usage.
//!
//! # Example
//!
//! ```no_run
//! use sqlmold::prelude::*;
//!
//! let result = diff_files(DiffOptions::new("old.model", "new.model")).unwrap();
//! println!("{} change(s)", result.changes.len());
//! ```

// API functions
pub use crate::api::{diff_files, generate, list_migrations};

// Options
pub use crate::api::{DiffOptions, GenerateOptions, ListOptions};

// Results
pub use crate::api::{DiffResult, GenerateResult, ListResult};

// Error type
pub use crate::api::Error;

// Core types
pub use crate::diff::{compute_diff, Change};
pub use crate::model::{Field, Migration, Model, ParsedSchema};
pub use crate::parser::{parse_schema, parse_schema_file};
pub use crate::store::MigrationStore;
