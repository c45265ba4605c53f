//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, ConfigureOptions};
use crate::app::config::ActionEnvironment;
use crate::app::output::write_json_output;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "nuget-auth")]
#[command(version)]
#[command(
    about = "Write a NuGet.config carrying credentials for one package feed",
    long_about = "Merges source keys from an existing NuGet.config with credentials taken from \
                  NUGET_AUTH_TOKEN and writes the result one directory above the root."
)]
struct Cli {
    /// Package feed URL to authenticate
    feed_url: String,
    /// Existing NuGet.config to merge from (defaults to nuget.config in the root)
    #[arg(short = 'c', long)]
    config_file: Option<PathBuf>,
    /// Working root; the generated config is written to its parent
    #[arg(short = 'r', long)]
    root: Option<PathBuf>,
    /// Username for the credentials (defaults to the owner input or repository owner)
    #[arg(short = 'o', long)]
    owner: Option<String>,
    /// Print the outcome as single-line JSON
    #[arg(long)]
    json: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_configure(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_configure(cli: Cli) -> Result<(), AppError> {
    let env = ActionEnvironment::from_env();
    let github_output = env.github_output.clone();
    let json = cli.json;
    let options = ConfigureOptions {
        feed_url: cli.feed_url,
        config_file: cli.config_file,
        root_dir: cli.root,
        owner: cli.owner,
    };
    let outcome = api::configure(options, env)?;

    if json {
        write_json_output(&outcome, &mut std::io::stdout().lock(), github_output.as_deref())?;
    } else {
        println!(
            "✅ Wrote credentials for {} to {}",
            outcome.source_keys.join(", "),
            outcome.config_path.display()
        );
    }
    Ok(())
}
