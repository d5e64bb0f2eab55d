//! Pure cost-allocation arithmetic. Never errors: unknown ids are ignored
//! and empty participant lists leave the shared pool undistributed.

use crate::domain::model::{BillItem, CostBreakdown, ItemAssignments, Participant};
use std::collections::HashSet;

/// Computes what each participant owes.
///
/// Assigned items split evenly across their assignees. Items with no valid
/// assignee, and all `is_shared` items regardless of assignment, form a
/// shared pool split evenly across every participant. No rounding happens
/// here; amounts accumulate at full precision.
pub fn compute_breakdown(
    items: &[BillItem],
    participants: &[Participant],
    assignments: &ItemAssignments,
) -> CostBreakdown {
    let mut totals: CostBreakdown = participants
        .iter()
        .map(|p| (p.id.clone(), 0.0))
        .collect();
    let known: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();

    let mut shared_pool = 0.0;

    for item in items {
        // Shared items always go to the pool, even if someone assigned them.
        let assignees: Vec<&str> = if item.is_shared {
            Vec::new()
        } else {
            assignments
                .get(&item.id)
                .map(|ids| {
                    ids.iter()
                        .map(String::as_str)
                        .filter(|id| known.contains(id))
                        .collect()
                })
                .unwrap_or_default()
        };

        if assignees.is_empty() {
            shared_pool += item.price;
            continue;
        }

        let share = item.price / assignees.len() as f64;
        for id in assignees {
            if let Some(total) = totals.get_mut(id) {
                *total += share;
            }
        }
    }

    if !participants.is_empty() {
        let share = shared_pool / participants.len() as f64;
        for total in totals.values_mut() {
            *total += share;
        }
    }

    totals
}
