// src/bin/migrate.rs
use clap::Parser;
use mealplan_blog::config::BackendConfig;
use mealplan_blog::infrastructure::{database, migration_target::PostgresMigrationTarget};
use mealplan_blog::migration::{
    DEFAULT_MIGRATION_FILE, MigrationError, MigrationMode, MigrationRunner,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Apply the blog schema migration to the hosted database.
#[derive(Debug, Parser)]
#[command(name = "migrate", version, about)]
struct Args {
    /// Migration script to apply.
    #[arg(long, env = "MIGRATION_FILE", default_value = DEFAULT_MIGRATION_FILE)]
    file: PathBuf,

    /// Send the whole script as one batch instead of statement by statement.
    #[arg(long)]
    batch: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("migration failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), MigrationError> {
    let config = BackendConfig::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "configuration rejected; nothing was attempted");
    })?;

    let pool = database::lazy_single_connection(&config)?;
    let target = PostgresMigrationTarget::new(pool.clone());
    let mode = if args.batch {
        MigrationMode::Batch
    } else {
        MigrationMode::Statements
    };

    let mut runner = MigrationRunner::new(target, args.file, mode);
    let outcome = runner.run().await;
    pool.close().await;

    let report = outcome?;
    if report.already_migrated {
        println!("database is already migrated");
    } else {
        println!(
            "migration complete: {} executed, {} skipped, {} total",
            report.executed, report.skipped, report.total
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
