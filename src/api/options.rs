/// Options for diffing two schema files.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Path of the older schema snapshot.
    pub from_path: String,
    /// Path of the newer schema snapshot.
    pub to_path: String,
}

impl DiffOptions {
    pub fn new(from_path: impl Into<String>, to_path: impl Into<String>) -> Self {
        Self {
            from_path: from_path.into(),
            to_path: to_path.into(),
        }
    }
}

/// Options for one generation run. This object carries the whole session
/// state (schema source, migrations root, cache location) into the core,
/// which itself stays stateless between invocations.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path of the schema file to migrate toward.
    pub schema_path: String,
    /// Migrations root, one subdirectory per migration.
    pub migrations_dir: String,
    /// Location of the last-seen-schema cache document.
    pub cache_path: String,
    /// Explicit migration name; a descriptive name is synthesized when absent.
    pub name: Option<String>,
    /// Refresh the cache after a successful run (on by default).
    pub update_cache: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            schema_path: String::new(),
            migrations_dir: "migrations".into(),
            cache_path: ".sqlmold/schema.cache.json".into(),
            name: None,
            update_cache: true,
        }
    }
}

impl GenerateOptions {
    /// Create new generate options with the required field.
    pub fn new(schema_path: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            ..Default::default()
        }
    }

    /// Set the migrations root.
    pub fn with_migrations_dir(mut self, dir: impl Into<String>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Set the schema cache location.
    pub fn with_cache_path(mut self, path: impl Into<String>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Set an explicit migration name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Leave the cache untouched after the run.
    pub fn without_cache_update(mut self) -> Self {
        self.update_cache = false;
        self
    }
}

/// Options for listing persisted migrations.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub migrations_dir: String,
}

impl ListOptions {
    pub fn new(migrations_dir: impl Into<String>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
        }
    }
}
