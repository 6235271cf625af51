use chrono::Utc;
use log::{debug, warn};

use super::time_groups_errors::TimeGroupError;
use super::time_groups_model::{TimeGroup, TimeOption};
use crate::errors::{Result, ValidationError};
use crate::utils::{new_id, TimeOfDay};

/// Owns the set of time groups and keeps two invariants after every
/// mutation: no two groups overlap, and the list is sorted by start time.
#[derive(Debug, Clone, Default)]
pub struct TimeGroupRegistry {
    groups: Vec<TimeGroup>,
}

impl TimeGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from stored groups.
    ///
    /// Stored data is kept as-is even when it violates the overlap invariant
    /// (it may have been written by an older version); the violation is logged.
    pub fn from_groups(groups: Vec<TimeGroup>) -> Self {
        let mut registry = Self { groups };
        registry.sort();

        for (earlier, later) in registry.overlapping_groups() {
            warn!(
                "Stored time groups '{}' and '{}' overlap",
                earlier.name, later.name
            );
        }
        registry
    }

    /// Each group that starts before an earlier group has ended, paired with
    /// the earlier group reaching furthest. Empty whenever the invariant holds.
    pub(crate) fn overlapping_groups(&self) -> Vec<(&TimeGroup, &TimeGroup)> {
        let mut overlaps = Vec::new();
        let mut furthest: Option<&TimeGroup> = None;
        for group in &self.groups {
            if let Some(held) = furthest {
                if group.start_time < held.end_time {
                    overlaps.push((held, group));
                }
            }
            if furthest.map_or(true, |held| group.end_time > held.end_time) {
                furthest = Some(group);
            }
        }
        overlaps
    }

    /// All groups, sorted ascending by start time.
    pub fn list_groups(&self) -> &[TimeGroup] {
        &self.groups
    }

    pub fn get_group(&self, id: &str) -> Option<&TimeGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Adds a new group after checking order and overlap.
    pub fn add_group(&mut self, name: &str, start: TimeOfDay, end: TimeOfDay) -> Result<TimeGroup> {
        let name = Self::validate(&self.groups, None, name, start, end)?;

        let group = TimeGroup {
            id: new_id(),
            name,
            start_time: start,
            end_time: end,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        debug!(
            "Adding time group '{}' ({}-{})",
            group.name, group.start_time, group.end_time
        );

        self.groups.push(group.clone());
        self.sort();
        Ok(group)
    }

    /// Renames and/or moves an existing group. The overlap check ignores the
    /// group being edited.
    pub fn update_group(
        &mut self,
        id: &str,
        name: &str,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<TimeGroup> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| TimeGroupError::NotFound(id.to_string()))?;
        let name = Self::validate(&self.groups, Some(id), name, start, end)?;

        let group = &mut self.groups[index];
        group.name = name;
        group.start_time = start;
        group.end_time = end;
        group.updated_at = Some(Utc::now());
        let updated = group.clone();

        self.sort();
        Ok(updated)
    }

    /// Removes a group. Appointments that booked its window keep their own
    /// copy of the time string and are not touched.
    pub fn delete_group(&mut self, id: &str) -> Result<TimeGroup> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| TimeGroupError::NotFound(id.to_string()))?;
        Ok(self.groups.remove(index))
    }

    /// Bookable options, one per group, in start-time order.
    pub fn time_options(&self) -> Vec<TimeOption> {
        self.groups
            .iter()
            .map(|g| {
                let value = g.slot().to_string();
                TimeOption {
                    label: format!("{} ({})", g.name, value),
                    value,
                }
            })
            .collect()
    }

    fn validate(
        groups: &[TimeGroup],
        exclude_id: Option<&str>,
        name: &str,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        if start >= end {
            return Err(TimeGroupError::InvalidOrder {
                start: start.to_string(),
                end: end.to_string(),
            }
            .into());
        }

        let conflicting = groups
            .iter()
            .filter(|g| exclude_id != Some(g.id.as_str()))
            .find(|g| g.overlaps(start, end));

        if let Some(other) = conflicting {
            return Err(TimeGroupError::Overlap {
                window: format!("{}-{}", start, end),
                conflicting_name: other.name.clone(),
                conflicting_window: other.slot().to_string(),
            }
            .into());
        }

        Ok(name.to_string())
    }

    fn sort(&mut self) {
        // Stable, so groups with equal starts (only possible in stored data)
        // keep their stored order.
        self.groups.sort_by_key(|g| g.start_time);
    }
}
