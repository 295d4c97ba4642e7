//! hcp-deploy CLI - import and tag HCP service images on OpenShift

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use hcp_deploy::commands;
use hcp_deploy::commands::deploy::DeployOptions;
use hcp_deploy::config::catalog::Namespace;
use hcp_deploy::utils::{enhance_error, logger};
use std::io;

#[derive(Parser)]
#[command(name = "hcp-deploy")]
#[command(author, version, about = "Import and tag the latest HCP service images on OpenShift", long_about = None)]
struct Cli {
    /// Verbose output (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG, -vvv: TRACE
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import and tag the latest images in a target namespace
    Deploy {
        /// Target environment (ta, int or prod)
        #[arg(short, long, default_value = "ta")]
        namespace: Namespace,

        /// Only deploy services whose name contains one of these fragments
        #[arg(short, long = "deployment", num_args = 1..)]
        deployment: Vec<String>,

        /// Deploy latest releases instead of latest snapshots
        #[arg(long)]
        release: bool,

        /// Echo the oc commands without executing them
        #[arg(long)]
        offline: bool,

        /// Skip the production confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the service catalog
    Catalog,

    /// Check prerequisites and credentials
    Check,

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Deploy {
            namespace,
            deployment,
            release,
            offline,
            yes,
        } => commands::deploy::deploy(DeployOptions {
            namespace,
            release,
            offline,
            deployments: deployment,
            assume_yes: yes,
        }),
        Commands::Catalog => commands::catalog::list(),
        Commands::Check => commands::check::check(),
        Commands::Completion { shell } => handle_completion_command(shell),
        Commands::Version => handle_version_command(),
    };

    if let Err(err) = result {
        enhance_error(err).display();
        std::process::exit(1);
    }
}

fn handle_completion_command(shell: Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "hcp-deploy", &mut io::stdout());
    Ok(())
}

fn handle_version_command() -> anyhow::Result<()> {
    println!("hcp-deploy {}", env!("CARGO_PKG_VERSION"));
    println!("Import and tag HCP service images on OpenShift");
    Ok(())
}
