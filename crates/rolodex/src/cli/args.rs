//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::validators::{validate_field, validate_network_name, validate_profile_ref};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Display name for the network
    #[arg(short, long, value_parser = validate_network_name)]
    pub name: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Full name of the person
    #[arg(value_parser = validate_field)]
    pub name: String,

    /// Current title
    #[arg(short, long, default_value = "", value_parser = validate_field)]
    pub title: String,

    /// Current company
    #[arg(short, long, default_value = "", value_parser = validate_field)]
    pub company: String,
}

/// Arguments for commands taking two profiles (`connect`, `overlap`, `path`)
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    /// First profile (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub first: String,

    /// Second profile (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub second: String,
}

/// Arguments for the `employ` command
#[derive(Parser, Debug, Clone)]
pub struct EmployArgs {
    /// Profile to update (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub profile: String,

    /// Role held
    #[arg(short, long, value_parser = validate_field)]
    pub role: String,

    /// Company name
    #[arg(short, long, value_parser = validate_field)]
    pub company: String,

    /// First year in the role
    #[arg(long, allow_negative_numbers = true)]
    pub start: i32,

    /// Last year in the role
    #[arg(long, allow_negative_numbers = true)]
    pub end: i32,
}

/// Arguments for the `study` command
#[derive(Parser, Debug, Clone)]
pub struct StudyArgs {
    /// Profile to update (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub profile: String,

    /// Degree earned or pursued
    #[arg(short, long, value_parser = validate_field)]
    pub degree: String,

    /// School name
    #[arg(short, long, value_parser = validate_field)]
    pub school: String,

    /// First year of study
    #[arg(long, allow_negative_numbers = true)]
    pub start: i32,

    /// Last year of study
    #[arg(long, allow_negative_numbers = true)]
    pub end: i32,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Profile to display (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub profile: String,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Only list profiles at this company
    #[arg(short, long)]
    pub company: Option<String>,
}

/// Arguments for the `find` command
///
/// Every filter given must match. With no filter at all, any profile other
/// than the start matches, which finds the nearest connection.
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Profile to start from (exact name or #id)
    #[arg(value_parser = validate_profile_ref)]
    pub from: String,

    /// Current company must equal this
    #[arg(short, long)]
    pub company: Option<String>,

    /// Current title must contain this (case-insensitive)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Name must equal this
    #[arg(short, long)]
    pub name: Option<String>,

    /// Worked at this company at some point
    #[arg(long)]
    pub worked_at: Option<String>,

    /// Allow the starting profile itself to match
    #[arg(long)]
    pub include_self: bool,
}
