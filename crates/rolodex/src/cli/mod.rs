//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for rolodex using clap's
//! derive API.
//!
//! # Commands
//!
//! - `init`: Initialize a new rolodex directory
//! - `add`: Create a profile
//! - `connect`: Connect two profiles
//! - `employ` / `study`: Append employment or education history
//! - `show`: Show a profile summary
//! - `list`: List profiles
//! - `overlap`: Where two profiles worked together
//! - `path`: Shortest path between two profiles
//! - `find`: Shortest path to someone matching filters
//!
//! Profiles are referenced by exact name, or by id as `#<n>`.
//!
//! # Example
//!
//! ```bash
//! rolodex add "Sara Sood" --title "Professor" --company Northwestern
//! rolodex connect "Sara Sood" "Peter Zhong"
//! rolodex path "Sara Sood" "Kris Hammond"
//! rolodex find "Sara Sood" --company Deloitte
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{
    AddArgs, EmployArgs, FindArgs, InitArgs, ListArgs, PairArgs, ShowArgs, StudyArgs,
};

// Re-export validators for external use
pub use validators::{validate_field, validate_network_name, validate_profile_ref};

/// Rolodex - a professional network in your terminal
///
/// Keep track of who knows whom, where people worked together, and how to
/// reach someone through your connections. Data lives in `.rolodex/`.
#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new rolodex directory
    ///
    /// Creates `.rolodex/` with a configuration file and an empty profile list.
    Init(InitArgs),

    /// Add a new profile
    Add(AddArgs),

    /// Connect two profiles
    ///
    /// Connections are symmetric. Connecting an already connected pair
    /// changes nothing and reports "already connected".
    Connect(PairArgs),

    /// Add a job to a profile's employment history
    Employ(EmployArgs),

    /// Add an entry to a profile's education
    Study(StudyArgs),

    /// Show a profile with its connections and history
    Show(ShowArgs),

    /// List all profiles
    List(ListArgs),

    /// Find where two profiles worked together
    ///
    /// Reports the first company where their employment years overlap.
    Overlap(PairArgs),

    /// Find the shortest path between two profiles
    Path(PairArgs),

    /// Find the nearest profile matching the given filters
    Find(FindArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            Some(Commands::Add(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_add(&mut app, args, output_mode).await
            }
            Some(Commands::Connect(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_connect(&mut app, args, output_mode).await
            }
            Some(Commands::Employ(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_employ(&mut app, args, output_mode).await
            }
            Some(Commands::Study(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_study(&mut app, args, output_mode).await
            }
            Some(Commands::Show(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_show(&app, args, output_mode)
            }
            Some(Commands::List(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_list(&app, args, output_mode)
            }
            Some(Commands::Overlap(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_overlap(&app, args, output_mode)
            }
            Some(Commands::Path(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_path(&app, args, output_mode)
            }
            Some(Commands::Find(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_find(&app, args, output_mode)
            }
            None => {
                println!("Rolodex professional network");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["rolodex"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_global_json_flag() {
        let cli = Cli::try_parse_from(["rolodex", "list", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_parse_init_with_name() {
        let cli = Cli::try_parse_from(["rolodex", "init", "--name", "alumni", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert_eq!(args.name, Some("alumni".to_string()));
                assert!(args.quiet);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_add_defaults_to_empty_fields() {
        let cli = Cli::try_parse_from(["rolodex", "add", "Bob"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.name, "Bob");
                assert!(args.title.is_empty());
                assert!(args.company.is_empty());
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_connect_requires_two_profiles() {
        assert!(Cli::try_parse_from(["rolodex", "connect", "Sara"]).is_err());

        let cli = Cli::try_parse_from(["rolodex", "connect", "Sara", "#3"]).unwrap();
        match cli.command {
            Some(Commands::Connect(args)) => {
                assert_eq!(args.first, "Sara");
                assert_eq!(args.second, "#3");
            }
            _ => panic!("Expected Connect command"),
        }
    }

    #[test]
    fn test_parse_employ() {
        let cli = Cli::try_parse_from([
            "rolodex", "employ", "Milan", "--role", "Consultant", "--company", "FEV", "--start",
            "2009", "--end", "2018",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Employ(args)) => {
                assert_eq!(args.profile, "Milan");
                assert_eq!(args.company, "FEV");
                assert_eq!((args.start, args.end), (2009, 2018));
            }
            _ => panic!("Expected Employ command"),
        }
    }

    #[test]
    fn test_parse_employ_requires_years() {
        let result = Cli::try_parse_from([
            "rolodex", "employ", "Milan", "--role", "r", "--company", "c",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_find_filters() {
        let cli = Cli::try_parse_from([
            "rolodex",
            "find",
            "Sara",
            "--company",
            "Deloitte",
            "--include-self",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Find(args)) => {
                assert_eq!(args.from, "Sara");
                assert_eq!(args.company.as_deref(), Some("Deloitte"));
                assert!(args.title.is_none());
                assert!(args.include_self);
            }
            _ => panic!("Expected Find command"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_profile_ref() {
        assert!(Cli::try_parse_from(["rolodex", "show", "  "]).is_err());
    }
}
