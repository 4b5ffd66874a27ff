use super::*;

#[test]
fn parses_models_and_fields_in_source_order() {
    let schema = parse_schema(
        r#"
model User {
  id    Int    @id
  email String @unique
  name  String
}

model Post {
  id    Int    @id
  title String
}
"#,
    );

    assert_eq!(schema.models.len(), 2);
    assert_eq!(schema.models[0].name, "User");
    assert_eq!(schema.models[1].name, "Post");

    let user = &schema.models[0];
    let names: Vec<&str> = user.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "email", "name"]);
    assert_eq!(user.fields[0].type_name, "Int");
    assert_eq!(user.fields[0].attributes, vec!["@id".to_string()]);
    assert_eq!(user.fields[1].attributes, vec!["@unique".to_string()]);
    assert!(user.fields[2].attributes.is_empty());
}

#[test]
fn strips_array_and_optional_markers_into_modifiers() {
    let schema = parse_schema(
        r#"
model Post {
  tags     String[]
  subtitle String?
  body     String
}
"#,
    );

    let post = &schema.models[0];
    assert!(post.fields[0].is_array());
    assert!(!post.fields[0].is_optional());
    assert_eq!(post.fields[0].type_name, "String");

    assert!(post.fields[1].is_optional());
    assert_eq!(post.fields[1].type_name, "String");

    assert!(post.fields[2].modifiers.is_empty());
}

#[test]
fn captures_attribute_glued_to_type_token() {
    let schema = parse_schema(
        r#"
model User {
  email String@unique
}
"#,
    );

    let field = &schema.models[0].fields[0];
    assert_eq!(field.type_name, "String");
    assert_eq!(field.attributes, vec!["@unique".to_string()]);
}

#[test]
fn captures_attribute_bodies_containing_spaces() {
    let schema = parse_schema(
        r#"
model User {
  role String @default("member user")
  createdAt DateTime @default(now())
}
"#,
    );

    let user = &schema.models[0];
    assert_eq!(
        user.fields[0].attributes,
        vec![r#"@default("member user")"#.to_string()]
    );
    assert_eq!(
        user.fields[1].attributes,
        vec!["@default(now())".to_string()]
    );
}

#[test]
fn drops_lines_without_name_and_type() {
    let schema = parse_schema(
        r#"
model User {
  id Int @id
  dangling
  email String
}
"#,
    );

    let names: Vec<&str> = schema.models[0]
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "email"]);
}

#[test]
fn drops_block_attribute_lines() {
    let schema = parse_schema(
        r#"
model User {
  firstName String
  lastName  String
  @@unique([firstName, lastName])
  @@index([lastName])
}
"#,
    );

    let names: Vec<&str> = schema.models[0]
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["firstName", "lastName"]);
}

#[test]
fn skips_blank_lines_and_comments() {
    let schema = parse_schema(
        r#"
model User {
  // identity
  id Int @id

  // contact details
  email String
}
"#,
    );

    assert_eq!(schema.models[0].fields.len(), 2);
}

#[test]
fn skips_block_with_missing_closing_brace() {
    let schema = parse_schema(
        r#"
model Broken {
  id Int @id
"#,
    );

    assert!(schema.models.is_empty());
}

#[test]
fn unclosed_block_does_not_poison_earlier_models() {
    let schema = parse_schema(
        r#"
model User {
  id Int @id
}

model Broken {
  id Int
"#,
    );

    assert_eq!(schema.models.len(), 1);
    assert_eq!(schema.models[0].name, "User");
}

#[test]
fn duplicate_model_keeps_first_occurrence() {
    let schema = parse_schema(
        r#"
model User {
  id Int @id
}

model User {
  other String
}
"#,
    );

    assert_eq!(schema.models.len(), 1);
    assert_eq!(schema.models[0].fields[0].name, "id");
}

#[test]
fn duplicate_field_keeps_first_occurrence() {
    let schema = parse_schema(
        r#"
model User {
  id Int @id
  id String
}
"#,
    );

    assert_eq!(schema.models[0].fields.len(), 1);
    assert_eq!(schema.models[0].fields[0].type_name, "Int");
}

#[test]
fn enum_blocks_are_not_interpreted() {
    let schema = parse_schema(
        r#"
enum Role {
  ADMIN
  MEMBER
}

model User {
  id   Int  @id
  role Role
}
"#,
    );

    assert!(schema.enums.is_empty());
    assert_eq!(schema.models.len(), 1);
    // Unrecognized type passes through as opaque text.
    assert_eq!(schema.models[0].fields[1].type_name, "Role");
}

#[test]
fn parsing_twice_is_deterministic() {
    let text = r#"
model User {
  id    Int    @id
  email String @unique
  tags  String[]
}

model Post {
  id Int @id
}
"#;

    assert_eq!(parse_schema(text), parse_schema(text));
}

#[test]
fn empty_input_yields_empty_schema() {
    let schema = parse_schema("");
    assert!(schema.models.is_empty());
    assert!(schema.enums.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let result = parse_schema_file("/nonexistent/schema.model");
    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("I/O error"));
}
