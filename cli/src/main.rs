use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use cli::handlers::handle_plan;
use console::Style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dry-run the memory plan described by a JSON file
    Plan {
        /// Path to the plan file
        plan_path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Plan {
            plan_path,
        }) => {
            if let Err(error) = handle_plan(&plan_path) {
                eprintln!("{} {}", Style::new().red().bold().apply_to("error:"), error);
                std::process::exit(1);
            }
        },
        None => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
        },
    }
}
