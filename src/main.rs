use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mailmate::config::Settings;
use mailmate::runner::{run, Options};
use mailmate::telemetry::init_tracing;

/// Fill an HTML email template from a form or key/value pairs
#[derive(Debug, Parser)]
#[command(name = "mailmate", version, about)]
struct Cli {
    /// Template path; with no value, list available templates
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    template: Option<String>,

    /// Variable values (key1='value';key2='value2'); with no value, list
    /// the template's required variables
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    kv: Option<String>,

    /// Directory containing templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Recipient email address
    #[arg(long)]
    to: Option<String>,

    /// Carbon copy recipient email address
    #[arg(long)]
    cc: Option<String>,

    /// Blind carbon copy recipient email address
    #[arg(long)]
    bcc: Option<String>,

    /// Print the accepted draft as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::new()?;
    if let Some(dir) = cli.templates_dir {
        settings.templates.dir = dir;
    }

    init_tracing(&settings.log);
    tracing::debug!(templates_dir = %settings.templates.dir.display(), "Configuration loaded");

    let options = Options {
        template: cli.template,
        kv: cli.kv,
        to: cli.to,
        cc: cli.cc,
        bcc: cli.bcc,
        json: cli.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&settings, &options, &mut stdin.lock(), &mut stdout.lock()) {
        tracing::debug!(code = err.code(), error = %err, "Run failed");
        eprintln!("Error: {err}");
        if let Some(action) = err.suggested_action() {
            eprintln!("Suggested Action: {action}");
        }
        std::process::exit(1);
    }

    Ok(())
}
