use anyhow::Result;
use clap::Parser;
use copymatch_cli::commands::{Commands, ListCommands};
use copymatch_cli::output::OutputFormat;

/// Find passages a suspect document shares with its sources
#[derive(Debug, Parser)]
#[command(name = "copymatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} {}", format.name(), format.description());
                }
                Ok(())
            }
        },
    }
}
