use clap::Parser;
use listing_audit::utils::{file_name_of, MANIFEST_FILE};
use listing_audit::{render_json, render_text, run_audit, AuditConfig, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Listing Audit - compare a directory against a recorded CSV listing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Manifest listing the expected files
    #[arg(short, long, default_value = MANIFEST_FILE)]
    manifest: PathBuf,

    /// Directory to audit (not recursive)
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log progress and debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr, the report to stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", err);
    }

    let mut config = AuditConfig::new(args.manifest, args.dir);
    config.format = args.format;
    if let Some(exe_name) = std::env::current_exe().ok().as_deref().and_then(file_name_of) {
        config = config.exclude(exe_name);
    }

    info!("Starting file comparison");

    let report = match run_audit(&config).await {
        Ok(report) => report,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let rendered = match config.format {
        OutputFormat::Text => render_text(&report, &config, &mut stdout),
        OutputFormat::Json => render_json(&report, &mut stdout),
    };
    if let Err(err) = rendered {
        error!("Failed to write report: {}", err);
        return ExitCode::FAILURE;
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
