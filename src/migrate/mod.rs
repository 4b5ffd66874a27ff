use crate::diff::Change;
use crate::model::Migration;
use crate::sqlgen::generate_sql;
use crate::store::MigrationStore;
use crate::util::{sanitize_name, Result};
use std::sync::Mutex;

static LAST_TIMESTAMP: Mutex<u64> = Mutex::new(0);

/// 14-digit wall-clock stamp (`%Y%m%d%H%M%S`), bumped past the previously
/// issued value so successive calls within one process sort strictly
/// ascending even inside the same second.
fn next_timestamp() -> String {
    let now: u64 = chrono::Utc::now()
        .format("%Y%m%d%H%M%S")
        .to_string()
        .parse()
        .expect("timestamp format is numeric");

    let mut last = LAST_TIMESTAMP.lock().expect("timestamp clock lock");
    let stamped = now.max(*last + 1);
    *last = stamped;

    format!("{stamped:014}")
}

/// Builds a migration from a change list and persists it through the store
/// before returning. A returned `Migration` is always already durable.
///
/// An empty change list is not an error: the result is `Ok(None)` and nothing
/// is written.
pub fn generate(
    changes: &[Change],
    name: Option<&str>,
    store: &MigrationStore,
) -> Result<Option<Migration>> {
    if changes.is_empty() {
        return Ok(None);
    }

    let timestamp = next_timestamp();

    let explicit = name.map(sanitize_name).filter(|n| !n.is_empty());
    let named = explicit.or_else(|| {
        let described = describe_changes(changes);
        (!described.is_empty()).then_some(described)
    });

    let (id, name) = match named {
        Some(n) => (format!("{timestamp}_{n}"), n),
        None => (timestamp.clone(), format!("migration_{timestamp}")),
    };

    let pairs = generate_sql(changes);
    let up_sql = join_statements(pairs.iter().map(|p| p.up.as_str()));
    let down_sql = join_statements(pairs.iter().map(|p| p.down.as_str()));

    let migration = Migration {
        id,
        name,
        timestamp,
        up_sql,
        down_sql,
    };

    store.save(&migration)?;
    Ok(Some(migration))
}

fn join_statements<'a>(statements: impl Iterator<Item = &'a str>) -> String {
    let mut script = statements.collect::<Vec<_>>().join("\n\n");
    script.push('\n');
    script
}

/// Summarizes up to the first two changes into a name that hints at the
/// migration's content without inspecting the SQL.
fn describe_changes(changes: &[Change]) -> String {
    let labels: Vec<String> = changes.iter().take(2).map(change_label).collect();
    sanitize_name(&labels.join("_and_"))
}

fn change_label(change: &Change) -> String {
    match change {
        Change::CreateModel(model) => format!("add_{}", model.name),
        Change::DeleteModel { model } => format!("remove_{model}"),
        Change::CreateField { model, field } => format!("add_{}_to_{}", field.name, model),
        Change::DeleteField { model, field } => format!("remove_{field}_from_{model}"),
        Change::AlterField { model, new, .. } => format!("alter_{}_on_{}", new.name, model),
    }
}
