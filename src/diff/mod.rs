use crate::model::{Field, Model, ParsedSchema};
use std::fmt;

/// One detected structural difference between two schema snapshots.
///
/// Renames are not detected: a renamed model or field always decomposes into
/// a delete of the old name plus a create of the new name. Downstream
/// consumers rely on those delete+create semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    CreateModel(Model),
    DeleteModel {
        model: String,
    },
    CreateField {
        model: String,
        field: Field,
    },
    DeleteField {
        model: String,
        field: String,
    },
    AlterField {
        model: String,
        old: Field,
        new: Field,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::CreateModel(model) => {
                write!(f, "create model {} ({} fields)", model.name, model.fields.len())
            }
            Change::DeleteModel { model } => write!(f, "delete model {model}"),
            Change::CreateField { model, field } => {
                write!(f, "add field {}.{}", model, field.name)
            }
            Change::DeleteField { model, field } => write!(f, "drop field {model}.{field}"),
            Change::AlterField { model, old, new } => {
                write!(
                    f,
                    "alter field {}.{} ({} -> {})",
                    model, new.name, old.type_name, new.type_name
                )
            }
        }
    }
}

/// Computes the ordered change list between two schema snapshots. Pure, never
/// fails, and deterministic for a given pair of inputs.
///
/// Emission order: created models (new-schema order), then deleted models
/// (old-schema order), then field-level changes per surviving model
/// (old-schema model order). A wholly new model is one [`Change::CreateModel`]
/// carrying its full field list, never a create plus per-field adds, so its
/// SQL stays a single CREATE TABLE.
pub fn compute_diff(old: &ParsedSchema, new: &ParsedSchema) -> Vec<Change> {
    let mut changes = Vec::new();

    for model in &new.models {
        if old.model(&model.name).is_none() {
            changes.push(Change::CreateModel(model.clone()));
        }
    }

    for model in &old.models {
        if new.model(&model.name).is_none() {
            changes.push(Change::DeleteModel {
                model: model.name.clone(),
            });
        }
    }

    for old_model in &old.models {
        if let Some(new_model) = new.model(&old_model.name) {
            changes.extend(diff_fields(old_model, new_model));
        }
    }

    changes
}

fn diff_fields(old_model: &Model, new_model: &Model) -> Vec<Change> {
    let mut changes = Vec::new();

    for field in &new_model.fields {
        if old_model.field(&field.name).is_none() {
            changes.push(Change::CreateField {
                model: new_model.name.clone(),
                field: field.clone(),
            });
        }
    }

    for field in &old_model.fields {
        if new_model.field(&field.name).is_none() {
            changes.push(Change::DeleteField {
                model: old_model.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    for new_field in &new_model.fields {
        if let Some(old_field) = old_model.field(&new_field.name) {
            if !fields_equal(old_field, new_field) {
                changes.push(Change::AlterField {
                    model: new_model.name.clone(),
                    old: old_field.clone(),
                    new: new_field.clone(),
                });
            }
        }
    }

    changes
}

/// Field equality for change detection: type, modifier set, and attributes
/// as a sorted multiset. Attribute order never triggers a change; a
/// duplicated attribute token does.
fn fields_equal(a: &Field, b: &Field) -> bool {
    if a.type_name != b.type_name || a.modifiers != b.modifiers {
        return false;
    }

    let mut a_attrs = a.attributes.clone();
    let mut b_attrs = b.attributes.clone();
    a_attrs.sort();
    b_attrs.sort();
    a_attrs == b_attrs
}
