//! Employment overlap between two profiles.

use super::Network;
use crate::domain::ProfileId;
use crate::error::Result;

impl Network {
    /// Find a company where both profiles worked during a common year.
    ///
    /// Every job of `first` is compared against every job of `second`, in
    /// history order with `first` as the outer loop. The company of the
    /// first overlapping pair is returned, which is not necessarily the
    /// longest or most recent overlap. Year ranges are inclusive, so two
    /// jobs sharing only a boundary year overlap.
    ///
    /// Returns `Ok(None)` when the histories never overlap. An empty company
    /// name is a valid match and comes back as `Some("")`.
    pub fn where_did_they_work_together(
        &self,
        first: ProfileId,
        second: ProfileId,
    ) -> Result<Option<&str>> {
        let first = self.get(first)?;
        let second = self.get(second)?;

        Ok(first.employment_history.iter().find_map(|job| {
            second
                .employment_history
                .iter()
                .any(|other| job.overlaps(other))
                .then_some(job.company.as_str())
        }))
    }
}
