use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One priced line on a receipt, as normalized from model output.
///
/// `id` is a 1-based sequential string assigned in model output order and is
/// stable for the lifetime of a session. `is_shared` marks tax/service-charge
/// lines that are always divided across all participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub id: String,
    pub description: String,
    pub price: f64,
    pub is_shared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// Item id -> ids of the participants splitting that item.
pub type ItemAssignments = HashMap<String, HashSet<String>>;

/// Participant id -> amount owed. Recomputed in full on every query.
pub type CostBreakdown = HashMap<String, f64>;

/// Raw image bytes plus the MIME type reported to the model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Rounds to two decimal places (currency precision). Used when folding
/// schema-A tax shares into prices and when displaying amounts, never while
/// accumulating.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
