use clap::Parser;
use kantoku_cli::audit_cmd::{execute, AuditArgs};
use kantoku_cli::console::ConsoleSink;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter environment variable.
const LOG_ENV_VAR: &str = "KANTOKU_LOG";

/// kantoku: keep the repositories of GitHub organizations in line
#[derive(Parser)]
#[command(name = "kantoku", version)]
#[command(
    about = "Audit and repair hooks, services, labels and files across GitHub organizations",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    audit: AuditArgs,
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so they never mix with reported events
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let mut sink = ConsoleSink::stdio();

    match execute(&cli.audit, &mut sink).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
