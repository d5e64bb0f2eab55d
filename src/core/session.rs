//! In-memory state for one bill: extracted items, participants, and the
//! item-to-participant assignments the user builds up. Nothing persists;
//! `reset` starts a fresh bill.

use crate::core::allocator;
use crate::domain::model::{BillItem, CostBreakdown, ItemAssignments, Participant};
use crate::utils::error::{Result, SplitError};

#[derive(Debug, Default)]
pub struct BillSession {
    items: Vec<BillItem>,
    participants: Vec<Participant>,
    assignments: ItemAssignments,
    next_participant_id: u64,
}

impl BillSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn assignments(&self) -> &ItemAssignments {
        &self.assignments
    }

    /// Replaces the item list, dropping assignments whose item no longer
    /// exists.
    pub fn set_items(&mut self, items: Vec<BillItem>) {
        self.items = items;
        let keep: std::collections::HashSet<String> =
            self.items.iter().map(|i| i.id.clone()).collect();
        self.assignments.retain(|item_id, _| keep.contains(item_id));
    }

    /// Adds a participant with a freshly allocated id. Names must be
    /// non-empty and unique within the session.
    pub fn add_participant(&mut self, name: &str) -> Result<Participant> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SplitError::config("participant name cannot be empty"));
        }
        if self.participants.iter().any(|p| p.name == name) {
            return Err(SplitError::config(format!(
                "participant name already in use: {name}"
            )));
        }

        self.next_participant_id += 1;
        let participant = Participant {
            id: format!("p{}", self.next_participant_id),
            name: name.to_string(),
        };
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Removes a participant and cascades through every assignment set.
    /// Returns false when the id is unknown.
    pub fn remove_participant(&mut self, participant_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != participant_id);
        if self.participants.len() == before {
            return false;
        }

        for ids in self.assignments.values_mut() {
            ids.remove(participant_id);
        }
        self.assignments.retain(|_, ids| !ids.is_empty());
        true
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Records that a participant splits an item. Ignored (returns false)
    /// when either id is unknown, keeping the assignment map consistent with
    /// the current items and participants.
    pub fn assign(&mut self, item_id: &str, participant_id: &str) -> bool {
        if !self.items.iter().any(|i| i.id == item_id) {
            tracing::warn!("Ignoring assignment for unknown item id {item_id}");
            return false;
        }
        if !self.participants.iter().any(|p| p.id == participant_id) {
            tracing::warn!("Ignoring assignment for unknown participant id {participant_id}");
            return false;
        }

        self.assignments
            .entry(item_id.to_string())
            .or_default()
            .insert(participant_id.to_string())
    }

    pub fn unassign(&mut self, item_id: &str, participant_id: &str) -> bool {
        let Some(ids) = self.assignments.get_mut(item_id) else {
            return false;
        };
        let removed = ids.remove(participant_id);
        if ids.is_empty() {
            self.assignments.remove(item_id);
        }
        removed
    }

    /// Pure recomputation; see the allocator for the split rules.
    pub fn breakdown(&self) -> CostBreakdown {
        allocator::compute_breakdown(&self.items, &self.participants, &self.assignments)
    }

    /// Starts a new bill: clears items, participants, and assignments.
    pub fn reset(&mut self) {
        self.items.clear();
        self.participants.clear();
        self.assignments.clear();
    }
}
