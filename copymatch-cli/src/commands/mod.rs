//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod matching;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find passages of a suspect document reproduced by source documents
    Match(matching::MatchArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_match_command() {
        let cli = TestCli::try_parse_from([
            "copymatch", "match", "essay.txt", "a.txt", "b/*.txt", "-d", "1", "-l", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Match(args) => {
                assert_eq!(args.suspect, "essay.txt");
                assert_eq!(args.sources, vec!["a.txt", "b/*.txt"]);
                assert_eq!(args.distance, Some(1));
                assert_eq!(args.length, Some(5));
                assert!(args.format.is_none());
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn test_match_requires_a_source() {
        assert!(TestCli::try_parse_from(["copymatch", "match", "essay.txt"]).is_err());
    }

    #[test]
    fn test_parse_list_formats() {
        let cli = TestCli::try_parse_from(["copymatch", "list", "formats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_parse_generate_and_validate() {
        let cli =
            TestCli::try_parse_from(["copymatch", "generate-config", "-o", "c.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));

        let cli = TestCli::try_parse_from(["copymatch", "validate", "-c", "c.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }
}
