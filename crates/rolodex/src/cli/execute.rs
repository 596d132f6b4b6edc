//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use std::io;

use super::args::{
    AddArgs, EmployArgs, FindArgs, InitArgs, ListArgs, PairArgs, ShowArgs, StudyArgs,
};
use crate::app::App;
use crate::domain::{ConnectionStatus, Education, Employment, Profile};
use crate::network::ProfilePredicate;
use crate::output::{self, OutputConfig, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;
    let result = init::init(&current_dir, args.name.as_deref()).await?;

    if !args.quiet {
        println!("Initialized rolodex in {}", result.rolodex_dir.display());
        println!("  Config:   {}", result.config_file.display());
        println!("  Profiles: {}", result.profiles_file.display());
        println!("  Network:  {}", result.network_name);
    }

    Ok(())
}

/// Execute the add command
pub async fn execute_add(app: &mut App, args: &AddArgs, output_mode: OutputMode) -> Result<()> {
    let id = app
        .network_mut()
        .create_profile(&args.name, &args.title, &args.company)?;
    app.save().await?;

    let profile = app
        .network()
        .profile(id)
        .ok_or(crate::error::Error::ProfileNotFound(id))?;

    match output_mode {
        OutputMode::Json => output::print_json(profile)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!("{} {}", output::success("Added", config), id);
        }
    }

    Ok(())
}

/// Execute the connect command
pub async fn execute_connect(
    app: &mut App,
    args: &PairArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let first = app.resolve(&args.first)?;
    let second = app.resolve(&args.second)?;

    let status = app.network_mut().connect(first, second)?;
    if status == ConnectionStatus::Connected {
        app.save().await?;
    }

    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "first": first,
            "second": second,
            "status": status,
        }))?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            let message = match status {
                ConnectionStatus::Connected => output::success(&status.to_string(), config),
                ConnectionStatus::AlreadyConnected => output::warning(&status.to_string(), config),
            };
            println!("{} and {}: {message}", args.first, args.second);
        }
    }

    Ok(())
}

/// Execute the employ command
pub async fn execute_employ(
    app: &mut App,
    args: &EmployArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let id = app.resolve(&args.profile)?;
    let job = Employment::new(&args.role, &args.company, args.start, args.end);

    app.network_mut().add_employment(id, job.clone())?;
    app.save().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&job)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!(
                "{} {} at {} ({} - {}) to {id}",
                output::success("Added", config),
                job.role,
                job.company,
                job.start_year,
                job.end_year
            );
        }
    }

    Ok(())
}

/// Execute the study command
pub async fn execute_study(app: &mut App, args: &StudyArgs, output_mode: OutputMode) -> Result<()> {
    let id = app.resolve(&args.profile)?;
    let entry = Education::new(&args.degree, &args.school, args.start, args.end);

    app.network_mut().add_education(id, entry.clone())?;
    app.save().await?;

    match output_mode {
        OutputMode::Json => output::print_json(&entry)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!(
                "{} {}, {} ({} - {}) to {id}",
                output::success("Added", config),
                entry.degree,
                entry.school,
                entry.start_year,
                entry.end_year
            );
        }
    }

    Ok(())
}

/// Execute the show command
pub fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let id = app.resolve(&args.profile)?;
    let summary = app.network().summary(id)?;

    match output_mode {
        OutputMode::Json => {
            let connections: Vec<_> = summary.connections().iter().map(|p| p.id).collect();
            output::print_json(&serde_json::json!({
                "profile": summary.profile(),
                "connections": connections,
            }))?;
        }
        OutputMode::Text => print!("{summary}"),
    }

    Ok(())
}

/// Execute the list command
pub fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let profiles: Vec<&Profile> = app
        .network()
        .profiles()
        .into_iter()
        .filter(|p| args.company.as_ref().is_none_or(|c| &p.company == c))
        .collect();

    match output_mode {
        OutputMode::Json => output::print_json(&profiles)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            if profiles.is_empty() {
                let notice = format!("No profiles in '{}'", app.network_name());
                println!("{}", output::warning(&notice, config));
            }
            let mut stdout = io::stdout().lock();
            for profile in profiles {
                output::write_profile_line(&mut stdout, profile, config)?;
            }
        }
    }

    Ok(())
}

/// Execute the overlap command
pub fn execute_overlap(app: &App, args: &PairArgs, output_mode: OutputMode) -> Result<()> {
    let first = app.resolve(&args.first)?;
    let second = app.resolve(&args.second)?;

    let company = app.network().where_did_they_work_together(first, second)?;

    match output_mode {
        OutputMode::Json => output::print_json(&serde_json::json!({ "company": company }))?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            match company {
                Some(company) => println!(
                    "{} and {} worked together at {}",
                    args.first,
                    args.second,
                    output::success(company, config)
                ),
                None => println!("{}", output::warning("No overlap", config)),
            }
        }
    }

    Ok(())
}

/// Execute the path command
pub fn execute_path(app: &App, args: &PairArgs, output_mode: OutputMode) -> Result<()> {
    let first = app.resolve(&args.first)?;
    let second = app.resolve(&args.second)?;

    let path = app.network().shortest_path(first, second)?;
    output::print_path(path.as_ref(), output_mode)?;

    Ok(())
}

/// Filters from the `find` command; every filter given must match.
struct ProfileFilter<'a> {
    company: Option<&'a str>,
    title: Option<String>,
    name: Option<&'a str>,
    worked_at: Option<&'a str>,
    include_self: bool,
}

impl<'a> ProfileFilter<'a> {
    fn from_args(args: &'a FindArgs) -> Self {
        Self {
            company: args.company.as_deref(),
            title: args.title.as_ref().map(|t| t.to_lowercase()),
            name: args.name.as_deref(),
            worked_at: args.worked_at.as_deref(),
            include_self: args.include_self,
        }
    }
}

impl ProfilePredicate for ProfileFilter<'_> {
    fn matches(&self, profile: &Profile) -> bool {
        self.company.is_none_or(|c| profile.company == c)
            && self
                .title
                .as_deref()
                .is_none_or(|t| profile.title.to_lowercase().contains(t))
            && self.name.is_none_or(|n| profile.name == n)
            && self.worked_at.is_none_or(|c| {
                profile
                    .employment_history
                    .iter()
                    .any(|job| job.company == c)
            })
    }

    fn includes_start(&self) -> bool {
        self.include_self
    }
}

/// Execute the find command
pub fn execute_find(app: &App, args: &FindArgs, output_mode: OutputMode) -> Result<()> {
    let from = app.resolve(&args.from)?;

    let path = app
        .network()
        .shortest_path_to_someone_who(from, ProfileFilter::from_args(args))?;
    output::print_path(path.as_ref(), output_mode)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProfileId;

    fn find_args(from: &str) -> FindArgs {
        FindArgs {
            from: from.to_string(),
            company: None,
            title: None,
            name: None,
            worked_at: None,
            include_self: false,
        }
    }

    #[test]
    fn test_filter_without_criteria_matches_anyone() {
        let args = find_args("x");
        let filter = ProfileFilter::from_args(&args);
        assert!(filter.matches(&Profile::new(ProfileId::new(0), "", "", "")));
        assert!(!filter.includes_start());
    }

    #[test]
    fn test_filter_requires_every_criterion() {
        let mut args = find_args("x");
        args.company = Some("Northwestern".to_string());
        args.title = Some("PROFESSOR".to_string());
        let filter = ProfileFilter::from_args(&args);

        let kris = Profile::new(
            ProfileId::new(1),
            "Kris Hammond",
            "Professor of Computer Science",
            "Northwestern",
        );
        let bob = Profile::new(ProfileId::new(2), "Bob", "Northwestern", "");
        assert!(filter.matches(&kris));
        assert!(!filter.matches(&bob));
    }

    #[test]
    fn test_filter_worked_at_checks_history() {
        let mut args = find_args("x");
        args.worked_at = Some("another company".to_string());
        args.include_self = true;
        let filter = ProfileFilter::from_args(&args);

        let mut masum = Profile::new(ProfileId::new(3), "Masum Patel", "Consultant", "Deloitte");
        assert!(!filter.matches(&masum));
        masum
            .employment_history
            .push(Employment::new("another role", "another company", 1995, 1996));
        assert!(filter.matches(&masum));
        assert!(filter.includes_start());
    }
}
