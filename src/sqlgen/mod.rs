use crate::diff::Change;
use crate::model::{Field, Model};

/// One forward statement and its revert counterpart for a single change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementPair {
    pub up: String,
    pub down: String,
}

/// Generates one (up, down) statement pair per change, in input order.
pub fn generate_sql(changes: &[Change]) -> Vec<StatementPair> {
    changes.iter().map(generate_change_sql).collect()
}

fn generate_change_sql(change: &Change) -> StatementPair {
    match change {
        Change::CreateModel(model) => StatementPair {
            up: generate_create_table(model),
            down: format!("DROP TABLE IF EXISTS {};", table_name(&model.name)),
        },

        Change::DeleteModel { model } => {
            let table = table_name(model);
            StatementPair {
                up: format!("DROP TABLE IF EXISTS {table};"),
                // A true reverse needs the dropped model's original field
                // list, which is not retained.
                down: format!(
                    "-- Table \"{table}\" was dropped; its original column list is not retained.\n\
                     -- CREATE TABLE {table} (...);"
                ),
            }
        }

        Change::CreateField { model, field } => {
            let table = table_name(model);
            StatementPair {
                up: format!(
                    "ALTER TABLE {table} ADD COLUMN {};",
                    format_column(field)
                ),
                down: format!("ALTER TABLE {table} DROP COLUMN {};", field.name),
            }
        }

        Change::DeleteField { model, field } => {
            let table = table_name(model);
            StatementPair {
                up: format!("ALTER TABLE {table} DROP COLUMN {field};"),
                down: format!(
                    "-- Column \"{field}\" was dropped from \"{table}\"; its original definition is not retained.\n\
                     -- ALTER TABLE {table} ADD COLUMN {field} ...;"
                ),
            }
        }

        Change::AlterField { model, old, new } => {
            let table = table_name(model);
            let note = "-- Constraint changes (NOT NULL, UNIQUE, PRIMARY KEY) may need separate handling.";
            StatementPair {
                up: format!(
                    "ALTER TABLE {table} ALTER COLUMN {} TYPE {};\n{note}",
                    new.name,
                    sql_type(new)
                ),
                down: format!(
                    "ALTER TABLE {table} ALTER COLUMN {} TYPE {};\n{note}",
                    old.name,
                    sql_type(old)
                ),
            }
        }
    }
}

/// Table names are the lowercased model name, unquoted.
pub fn table_name(model: &str) -> String {
    model.to_lowercase()
}

fn generate_create_table(model: &Model) -> String {
    let table = table_name(&model.name);

    if model.fields.is_empty() {
        return format!("CREATE TABLE {table} ();");
    }

    let columns: Vec<String> = model
        .fields
        .iter()
        .map(|f| format!("  {}", format_column(f)))
        .collect();

    format!("CREATE TABLE {table} (\n{}\n);", columns.join(",\n"))
}

fn format_column(field: &Field) -> String {
    let mut parts = vec![field.name.clone(), sql_type(field)];
    parts.extend(constraints(field));
    parts.join(" ")
}

/// Constraints in fixed order: PRIMARY KEY, UNIQUE, NOT NULL. Each token is
/// emitted at most once. NOT NULL applies when the field carries neither the
/// optionality marker nor a default-value attribute.
fn constraints(field: &Field) -> Vec<String> {
    let mut parts = Vec::new();

    if field.has_attribute("@id") {
        parts.push("PRIMARY KEY".to_string());
    }
    if field.has_attribute("@unique") {
        parts.push("UNIQUE".to_string());
    }
    if !field.is_optional() && !field.has_attribute("@default") {
        parts.push("NOT NULL".to_string());
    }

    parts
}

/// Maps a logical type name to its SQL keyword. Unknown logical types fall
/// back to TEXT rather than failing; the array modifier appends `[]`.
pub fn sql_type(field: &Field) -> String {
    let base = match field.type_name.to_lowercase().as_str() {
        "string" => "TEXT",
        "int" | "integer" => "INTEGER",
        "float" => "REAL",
        "boolean" | "bool" => "BOOLEAN",
        "timestamp" | "datetime" => "TIMESTAMP",
        "json" => "JSONB",
        _ => "TEXT",
    };

    if field.is_array() {
        format!("{base}[]")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    fn single_model(text: &str) -> Model {
        parse_schema(text).models.into_iter().next().expect("one model")
    }

    #[test]
    fn create_model_round_trip() {
        let model = single_model(
            r#"
model Post {
  id    Int    @id
  title String
}
"#,
        );

        let pairs = generate_sql(&[Change::CreateModel(model)]);
        assert_eq!(pairs.len(), 1);

        assert!(pairs[0].up.contains("CREATE TABLE post ("));
        assert!(pairs[0].up.contains("id INTEGER PRIMARY KEY NOT NULL"));
        assert!(pairs[0].up.contains("title TEXT NOT NULL"));
        assert_eq!(pairs[0].down, "DROP TABLE IF EXISTS post;");
    }

    #[test]
    fn constraints_come_in_fixed_order() {
        let model = single_model("model User {\n  email String @unique @id\n}");
        let pairs = generate_sql(&[Change::CreateModel(model)]);

        assert!(pairs[0]
            .up
            .contains("email TEXT PRIMARY KEY UNIQUE NOT NULL"));
    }

    #[test]
    fn optional_field_has_no_not_null() {
        let model = single_model("model User {\n  bio String?\n}");
        let field = model.fields[0].clone();

        let pairs = generate_sql(&[Change::CreateField {
            model: "User".to_string(),
            field,
        }]);

        assert_eq!(pairs[0].up, "ALTER TABLE user ADD COLUMN bio TEXT;");
        assert_eq!(pairs[0].down, "ALTER TABLE user DROP COLUMN bio;");
    }

    #[test]
    fn default_attribute_suppresses_not_null() {
        let model = single_model("model User {\n  role String @default(\"member\")\n}");
        let pairs = generate_sql(&[Change::CreateModel(model)]);

        assert!(pairs[0].up.contains("role TEXT,\n") || pairs[0].up.contains("role TEXT\n"));
        assert!(!pairs[0].up.contains("role TEXT NOT NULL"));
    }

    #[test]
    fn delete_model_down_is_a_commented_placeholder() {
        let pairs = generate_sql(&[Change::DeleteModel {
            model: "User".to_string(),
        }]);

        assert_eq!(pairs[0].up, "DROP TABLE IF EXISTS user;");
        assert!(pairs[0].down.starts_with("--"));
        assert!(pairs[0].down.contains("user"));
        assert!(pairs[0].down.contains("-- CREATE TABLE user"));
    }

    #[test]
    fn delete_field_down_is_a_commented_placeholder() {
        let pairs = generate_sql(&[Change::DeleteField {
            model: "User".to_string(),
            field: "bio".to_string(),
        }]);

        assert_eq!(pairs[0].up, "ALTER TABLE user DROP COLUMN bio;");
        assert!(pairs[0].down.starts_with("--"));
    }

    #[test]
    fn alter_field_is_symmetric() {
        let old_schema = parse_schema("model User {\n  age Int\n}");
        let new_schema = parse_schema("model User {\n  age Float\n}");
        let old = old_schema.models[0].fields[0].clone();
        let new = new_schema.models[0].fields[0].clone();

        let pairs = generate_sql(&[Change::AlterField {
            model: "User".to_string(),
            old,
            new,
        }]);

        assert!(pairs[0].up.contains("ALTER TABLE user ALTER COLUMN age TYPE REAL;"));
        assert!(pairs[0]
            .down
            .contains("ALTER TABLE user ALTER COLUMN age TYPE INTEGER;"));
        assert!(pairs[0].up.contains("-- Constraint changes"));
    }

    #[test]
    fn unknown_logical_type_falls_back_to_text() {
        let model = single_model("model User {\n  role Role\n}");
        assert_eq!(sql_type(&model.fields[0]), "TEXT");
    }

    #[test]
    fn array_modifier_appends_brackets() {
        let model = single_model("model Post {\n  tags String[]\n}");
        assert_eq!(sql_type(&model.fields[0]), "TEXT[]");
    }

    #[test]
    fn type_mapping_table() {
        for (logical, sql) in [
            ("String", "TEXT"),
            ("Int", "INTEGER"),
            ("Float", "REAL"),
            ("Boolean", "BOOLEAN"),
            ("DateTime", "TIMESTAMP"),
            ("Json", "JSONB"),
        ] {
            let model = single_model(&format!("model M {{\n  f {logical}\n}}"));
            assert_eq!(sql_type(&model.fields[0]), sql, "logical type {logical}");
        }
    }

    #[test]
    fn empty_model_creates_empty_table() {
        let pairs = generate_sql(&[Change::CreateModel(Model {
            name: "Empty".to_string(),
            fields: Vec::new(),
        })]);

        assert_eq!(pairs[0].up, "CREATE TABLE empty ();");
    }
}
