mod config;
mod report;

use tracing::info;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_report=info,forum_db=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    // One store handle for the whole process
    let db = forum_db::Database::open(&config.db_path)?;

    let report = report::build(&db, config.limit)?;
    info!(
        "Report built: {} most liked, {} most followed",
        report.most_liked.len(),
        report.most_followed.len()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
