//! sqlmold - schema-as-code SQL migration generator.
//!
//! This crate detects structural changes to a declarative data-model
//! definition and deterministically generates forward/backward SQL migration
//! scripts for them. Define models in a schema file, diff snapshots, and
//! persist versioned up/down migration artifacts.
//!
//! # Quick Start
//!
//! Use the high-level API via the [`api`] module or [`prelude`]:
//!
//! ```no_run
//! use sqlmold::prelude::*;
//!
//! let result = generate(GenerateOptions::new("schema.model")).unwrap();
//!
//! match result.migration {
//!     Some(migration) => println!("created {}", migration.id),
//!     None => println!("no changes detected"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`api`] - High-level API mirroring CLI commands
//! - [`prelude`] - Convenient re-exports for common usage
//! - [`model`] - Schema model types (ParsedSchema, Model, Field, Migration)
//! - [`parser`] - Schema text scanner
//! - [`diff`] - Schema comparison and change detection
//! - [`sqlgen`] - Per-change SQL statement pairs
//! - [`migrate`] - Migration identity and generation
//! - [`store`] - On-disk migration artifacts
//! - [`cache`] - Last-seen-schema cache

pub mod api;
pub mod cache;
pub mod diff;
pub mod migrate;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod sqlgen;
pub mod store;
pub mod util;
