use clap::{Parser, Subcommand};
use importer::RosterValidator;
use importer::roster::read_roster;
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use storage::dto::athlete::CreateAthleteRequest;
use storage::repository::athlete::AthleteRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-import")]
#[command(about = "Athlete roster importer for the scoring console", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import athletes from a roster CSV file
    Roster {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Write a roster template CSV with example rows
    Template {
        #[arg(long, default_value = "athletes_template.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Roster {
            file,
            validate_only,
        } => {
            handle_roster_import(file, validate_only, &cli.database_url).await?;
        }
        Commands::Template { output } => {
            write_template(&output)?;
        }
    }

    Ok(())
}

async fn handle_roster_import(
    file: PathBuf,
    validate_only: bool,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading roster CSV from: {}", file.display());

    let records = read_roster(&file)?;
    let report = RosterValidator::validate(&records);
    report.log_errors();

    tracing::info!(
        "{} of {} row(s) valid, {} rejected",
        report.rows.len(),
        records.len(),
        records.len() - report.rows.len()
    );

    if validate_only || report.rows.is_empty() {
        return Ok(());
    }

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    // One creation at a time; an earlier success is never rolled back when a
    // later row fails.
    let repo = AthleteRepository::new(&pool);
    let mut success_count = 0;
    let mut failed_count = 0;

    for row in report.rows {
        let label = format!("{} {}", row.first_name, row.last_name);
        let request = CreateAthleteRequest::from(row);

        match repo.create(&request).await {
            Ok(_) => {
                success_count += 1;
                tracing::info!("  ✓ {}", label);
            }
            Err(e) => {
                failed_count += 1;
                tracing::error!("  ✗ {}: {}", label, e);
            }
        }
    }

    tracing::info!("Summary: {} imported, {} failed", success_count, failed_count);

    Ok(())
}

fn write_template(output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(output)?;

    writer.write_record(["first_name", "last_name", "gender", "age", "club", "level"])?;
    writer.write_record(["John", "Doe", "male", "14+ years", "City Gymnastics", "Level 10"])?;
    writer.write_record(["Jane", "Smith", "female", "12 years", "Elite Gymnastics", "Level 9"])?;
    writer.flush()?;

    tracing::info!("Template written to: {}", output.display());

    Ok(())
}
