#[cfg(test)]
mod tests;

use crate::model::{Field, Model, ParsedSchema};
use crate::util::{Result, SchemaError};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;

/// Reads and parses a schema file. The only error this can produce is an I/O
/// failure reading the source; malformed schema text never fails (see
/// [`parse_schema`]).
pub fn parse_schema_file(path: &str) -> Result<ParsedSchema> {
    let content = fs::read_to_string(path)
        .map_err(|e| SchemaError::IoError(format!("failed to read {path}: {e}")))?;
    Ok(parse_schema(&content))
}

/// Parses schema text into a [`ParsedSchema`]. Best-effort and infallible:
/// a construct the scanner cannot make sense of is omitted from the result
/// rather than aborting the parse.
///
/// Skip rules, in order:
/// - a `model` block whose closing brace cannot be located is skipped whole;
/// - within a block, blank lines and full-line `//` comments are skipped;
/// - a line with fewer than two whitespace-separated tokens is dropped;
/// - a line whose first token starts with `@` (block attributes such as
///   `@@index(...)`) is dropped;
/// - a duplicate model or field name keeps the first occurrence.
///
/// `enum` declarations and generator/datasource blocks carry no `model`
/// header and are never scanned; the `enums` collection stays empty.
pub fn parse_schema(text: &str) -> ParsedSchema {
    let header_re = Regex::new(r"\bmodel\s+(\w+)\s*\{").unwrap();

    let mut schema = ParsedSchema::new();

    for caps in header_re.captures_iter(text) {
        let name = caps[1].to_string();
        let open = caps.get(0).expect("match exists").end() - 1;

        let Some(body) = balanced_block(text, open) else {
            continue;
        };

        if schema.model(&name).is_some() {
            continue;
        }

        let fields = parse_fields(body);
        schema.models.push(Model { name, fields });
    }

    schema
}

/// Returns the text between the opening brace at `open` and its balancing
/// closing brace, or None when the block never closes.
fn balanced_block(text: &str, open: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;

    for (offset, &b) in bytes[open..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

fn parse_fields(body: &str) -> Vec<Field> {
    // Attributes run from their marker to the next marker or end of line,
    // so parenthesized bodies may contain spaces and nested parens. The
    // match is global over the whole line, not just post-type tokens, so
    // markers glued to another token with no whitespace are captured too.
    let attr_re = Regex::new(r"@[^@]+").unwrap();

    let mut fields: Vec<Field> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(name), Some(type_token)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        if name.starts_with('@') {
            continue;
        }
        if fields.iter().any(|f| f.name == name) {
            continue;
        }

        let attributes: Vec<String> = attr_re
            .find_iter(line)
            .map(|m| m.as_str().trim_end().to_string())
            .filter(|a| a.len() > 1)
            .collect();

        // An attribute glued to the type token (`String@unique`) belongs to
        // the attribute list, not the type.
        let type_part = match type_token.find('@') {
            Some(at) => &type_token[..at],
            None => type_token,
        };

        let mut modifiers = BTreeSet::new();
        let mut type_name = type_part;
        loop {
            if let Some(stripped) = type_name.strip_suffix("[]") {
                type_name = stripped;
                modifiers.insert("array".to_string());
            } else if let Some(stripped) = type_name.strip_suffix('?') {
                type_name = stripped;
                modifiers.insert("optional".to_string());
            } else {
                break;
            }
        }

        if type_name.is_empty() {
            continue;
        }

        fields.push(Field {
            name: name.to_string(),
            type_name: type_name.to_string(),
            modifiers,
            attributes,
        });
    }

    fields
}
