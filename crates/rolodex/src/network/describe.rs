//! Human-readable profile summary.

use crate::domain::Profile;
use std::fmt;

const PLACEHOLDER_FIELD: &str = "N/A";
const PLACEHOLDER_SECTION: &str = "None";

/// Text summary of a profile, produced by [`Network::summary`](super::Network::summary).
///
/// The layout is stable:
///
/// ```text
/// Profile Information:
/// Name: <name or N/A>
/// Current Title: <title or N/A>
/// Current Company: <company or N/A>
/// Connections:
///   - <name> (<title> at <company>)
/// Employment History:
///   - <role> at <company> (<start> - <end>)
/// Education:
///   - <degree>, <school> (<start> - <end>)
/// ```
///
/// A section without entries shows a single `  None` line.
#[derive(Debug, Clone)]
pub struct ProfileSummary<'a> {
    profile: &'a Profile,
    connections: Vec<&'a Profile>,
}

impl<'a> ProfileSummary<'a> {
    pub(super) fn new(profile: &'a Profile, connections: Vec<&'a Profile>) -> Self {
        Self {
            profile,
            connections,
        }
    }

    /// The summarized profile
    pub fn profile(&self) -> &'a Profile {
        self.profile
    }

    /// Connected profiles, in connection order
    pub fn connections(&self) -> &[&'a Profile] {
        &self.connections
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER_FIELD
    } else {
        value
    }
}

impl fmt::Display for ProfileSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;

        writeln!(f, "Profile Information:")?;
        writeln!(f, "Name: {}", or_placeholder(&profile.name))?;
        writeln!(f, "Current Title: {}", or_placeholder(&profile.title))?;
        writeln!(f, "Current Company: {}", or_placeholder(&profile.company))?;

        writeln!(f, "Connections:")?;
        if self.connections.is_empty() {
            writeln!(f, "  {PLACEHOLDER_SECTION}")?;
        }
        for conn in &self.connections {
            writeln!(f, "  - {} ({} at {})", conn.name, conn.title, conn.company)?;
        }

        writeln!(f, "Employment History:")?;
        if profile.employment_history.is_empty() {
            writeln!(f, "  {PLACEHOLDER_SECTION}")?;
        }
        for job in &profile.employment_history {
            writeln!(
                f,
                "  - {} at {} ({} - {})",
                job.role, job.company, job.start_year, job.end_year
            )?;
        }

        writeln!(f, "Education:")?;
        if profile.education.is_empty() {
            writeln!(f, "  {PLACEHOLDER_SECTION}")?;
        }
        for edu in &profile.education {
            writeln!(
                f,
                "  - {}, {} ({} - {})",
                edu.degree, edu.school, edu.start_year, edu.end_year
            )?;
        }

        Ok(())
    }
}
