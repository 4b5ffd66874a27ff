use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use sqlmold::api::{self, DiffOptions, GenerateOptions, ListOptions};
use sqlmold::diff::Change;

#[derive(Parser)]
#[command(name = "sqlmold")]
#[command(about = "Schema-as-code SQL migration generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two schema files and show detected changes
    Diff {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Generate a migration from schema changes since the last run
    Generate {
        #[arg(long)]
        schema: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, env = "SQLMOLD_MIGRATIONS_DIR", default_value = "migrations")]
        migrations_dir: String,
        #[arg(long, env = "SQLMOLD_CACHE_PATH", default_value = ".sqlmold/schema.cache.json")]
        cache_path: String,
    },

    /// List persisted migrations
    List {
        #[arg(long, env = "SQLMOLD_MIGRATIONS_DIR", default_value = "migrations")]
        migrations_dir: String,
    },

    /// Watch a schema file and generate migrations on change
    Watch {
        #[arg(long)]
        schema: String,
        #[arg(long, env = "SQLMOLD_MIGRATIONS_DIR", default_value = "migrations")]
        migrations_dir: String,
        #[arg(long, env = "SQLMOLD_CACHE_PATH", default_value = ".sqlmold/schema.cache.json")]
        cache_path: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff { from, to } => {
            let result = api::diff_files(DiffOptions::new(&from, &to))?;

            if result.is_empty {
                println!("{} No changes detected", "•".dimmed());
            } else {
                println!("{} {} change(s):", "✓".green(), result.changes.len());
                print_changes(&result.changes);
            }
            Ok(())
        }

        Commands::Generate {
            schema,
            name,
            migrations_dir,
            cache_path,
        } => {
            let mut options = GenerateOptions::new(&schema)
                .with_migrations_dir(&migrations_dir)
                .with_cache_path(&cache_path);
            if let Some(name) = name {
                options = options.with_name(name);
            }

            let result = api::generate(options)?;

            match result.migration {
                Some(migration) => {
                    println!("{} {} change(s):", "✓".green(), result.changes.len());
                    print_changes(&result.changes);
                    println!(
                        "{} Created migration {}",
                        "✓".green(),
                        migration.id.cyan().bold()
                    );
                }
                None => println!(
                    "{} No changes detected; no migration created",
                    "•".dimmed()
                ),
            }
            Ok(())
        }

        Commands::List { migrations_dir } => {
            let result = api::list_migrations(ListOptions::new(&migrations_dir))?;

            if result.migrations.is_empty() {
                println!("{} No migrations in {}", "•".dimmed(), migrations_dir);
            } else {
                for migration in &result.migrations {
                    println!(
                        "{}  {}  {}",
                        migration.timestamp.dimmed(),
                        migration.id.cyan(),
                        migration.name
                    );
                }
            }
            Ok(())
        }

        Commands::Watch {
            schema,
            migrations_dir,
            cache_path,
        } => watch(&schema, &migrations_dir, &cache_path),
    }
}

fn print_changes(changes: &[Change]) {
    for change in changes {
        let glyph = match change {
            Change::CreateModel(_) | Change::CreateField { .. } => "+".green(),
            Change::DeleteModel { .. } | Change::DeleteField { .. } => "-".red(),
            Change::AlterField { .. } => "~".yellow(),
        };
        println!("  {glyph} {change}");
    }
}

/// Watch a schema file for changes and auto-generate migrations. Each
/// debounced event batch runs the whole pipeline to completion before the
/// next batch is handled; parse failures and empty diffs are reported and
/// skipped, never fatal.
fn watch(schema: &str, migrations_dir: &str, cache_path: &str) -> Result<()> {
    use notify_debouncer_full::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
    use std::path::Path;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    let path = Path::new(schema);
    if !path.exists() {
        return Err(anyhow::anyhow!("Schema file not found: {schema}"));
    }

    println!("{}", "sqlmold watch mode".cyan().bold());
    println!("   Watching:   {}", schema.yellow());
    println!("   Migrations: {}", migrations_dir.yellow());
    println!("   Press {} to stop\n", "Ctrl+C".red());

    // Prime the cache so the first edit diffs against the current file, not
    // against an empty schema.
    run_pipeline(schema, migrations_dir, cache_path);

    let (tx, rx) = channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(500), None, tx)?;

    debouncer.watch(path, RecursiveMode::NonRecursive)?;

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events
                    .iter()
                    .any(|event| event.paths.iter().any(|p| p.ends_with(schema)));
                if relevant {
                    run_pipeline(schema, migrations_dir, cache_path);
                }
            }
            Ok(Err(errors)) => {
                for e in errors {
                    println!("{} Watch error: {e}", "✗".red());
                }
            }
            Err(e) => {
                println!("{} Channel error: {e}", "✗".red());
                break;
            }
        }
    }

    Ok(())
}

fn run_pipeline(schema: &str, migrations_dir: &str, cache_path: &str) {
    let now = chrono::Local::now().format("%H:%M:%S").to_string();

    let options = GenerateOptions::new(schema)
        .with_migrations_dir(migrations_dir)
        .with_cache_path(cache_path);

    match api::generate(options) {
        Ok(result) => match result.migration {
            Some(migration) => {
                println!(
                    "[{}] {} Detected {} change(s):",
                    now.dimmed(),
                    "✓".green(),
                    result.changes.len()
                );
                print_changes(&result.changes);
                println!("       created {}", migration.id.cyan());
            }
            None => println!("[{}] {} No changes detected", now.dimmed(), "•".dimmed()),
        },
        Err(e) => println!("[{}] {} {e}", now.dimmed(), "✗".red()),
    }
}
