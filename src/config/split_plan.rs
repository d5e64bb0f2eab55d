//! Non-interactive stand-in for the assignment UI: a TOML file naming the
//! participants and which of them split each extracted item id.
//!
//! ```toml
//! participants = ["Alice", "Bob"]
//!
//! [assignments]
//! 1 = ["Alice"]
//! 2 = ["Alice", "Bob"]
//! ```
//!
//! Items absent from `[assignments]` are split equally among everyone.

use crate::core::session::BillSession;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitPlan {
    pub participants: Vec<String>,
    #[serde(default)]
    pub assignments: HashMap<String, Vec<String>>,
}

impl SplitPlan {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            SplitError::config(format!("cannot read split plan {path}: {e}"))
        })?;
        let plan: SplitPlan = toml::from_str(&text)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Registers the plan's participants with the session and applies the
    /// assignments. Assignment entries for item ids the extractor never
    /// produced are skipped (the session logs them); names must all resolve.
    pub fn apply(&self, session: &mut BillSession) -> Result<()> {
        for name in &self.participants {
            session.add_participant(name)?;
        }

        for (item_id, names) in &self.assignments {
            for name in names {
                let Some(participant) = session.participant_by_name(name) else {
                    return Err(SplitError::config(format!(
                        "assignment for item {item_id} references unknown participant: {name}"
                    )));
                };
                let participant_id = participant.id.clone();
                session.assign(item_id, &participant_id);
            }
        }
        Ok(())
    }
}

impl Validate for SplitPlan {
    fn validate(&self) -> Result<()> {
        if self.participants.is_empty() {
            return Err(SplitError::config("split plan names no participants"));
        }

        let mut seen = HashSet::new();
        for name in &self.participants {
            if name.trim().is_empty() {
                return Err(SplitError::config("participant name cannot be empty"));
            }
            if !seen.insert(name.trim()) {
                return Err(SplitError::config(format!(
                    "duplicate participant name: {name}"
                )));
            }
        }

        let known: HashSet<&str> = self.participants.iter().map(String::as_str).collect();
        for (item_id, names) in &self.assignments {
            for name in names {
                if !known.contains(name.as_str()) {
                    return Err(SplitError::config(format!(
                        "assignment for item {item_id} references unknown participant: {name}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BillItem;
    use std::io::Write;

    fn item(id: &str, price: f64) -> BillItem {
        BillItem {
            id: id.to_string(),
            description: format!("Item {id}"),
            price,
            is_shared: false,
        }
    }

    #[test]
    fn test_plan_parses_from_toml() {
        let plan: SplitPlan = toml::from_str(
            r#"
            participants = ["Alice", "Bob"]

            [assignments]
            1 = ["Alice"]
            2 = ["Alice", "Bob"]
            "#,
        )
        .unwrap();

        assert_eq!(plan.participants, vec!["Alice", "Bob"]);
        assert_eq!(plan.assignments["2"], vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_assignments_table_is_optional() {
        let plan: SplitPlan = toml::from_str(r#"participants = ["Alice"]"#).unwrap();
        assert!(plan.assignments.is_empty());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_plans() {
        let plan: SplitPlan = toml::from_str(r#"participants = []"#).unwrap();
        assert!(plan.validate().is_err());

        let plan: SplitPlan = toml::from_str(r#"participants = ["Alice", "Alice"]"#).unwrap();
        assert!(plan.validate().is_err());

        let plan: SplitPlan = toml::from_str(
            r#"
            participants = ["Alice"]

            [assignments]
            1 = ["Mallory"]
            "#,
        )
        .unwrap();
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_apply_populates_session() {
        let plan: SplitPlan = toml::from_str(
            r#"
            participants = ["Alice", "Bob"]

            [assignments]
            1 = ["Alice"]
            "#,
        )
        .unwrap();

        let mut session = BillSession::new();
        session.set_items(vec![item("1", 10.0), item("2", 6.0)]);
        plan.apply(&mut session).unwrap();

        assert_eq!(session.participants().len(), 2);
        let alice = session.participant_by_name("Alice").unwrap().id.clone();
        let bob = session.participant_by_name("Bob").unwrap().id.clone();

        let breakdown = session.breakdown();
        assert!((breakdown[&alice] - 13.0).abs() < 1e-6);
        assert!((breakdown[&bob] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_skips_assignments_for_unknown_items() {
        let plan: SplitPlan = toml::from_str(
            r#"
            participants = ["Alice"]

            [assignments]
            99 = ["Alice"]
            "#,
        )
        .unwrap();

        let mut session = BillSession::new();
        session.set_items(vec![item("1", 10.0)]);
        plan.apply(&mut session).unwrap();

        assert!(session.assignments().is_empty());
        let alice = session.participant_by_name("Alice").unwrap().id.clone();
        assert!((session.breakdown()[&alice] - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "participants = [\"Alice\"]\n").unwrap();

        let plan = SplitPlan::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(plan.participants, vec!["Alice"]);

        let err = SplitPlan::from_file("/nonexistent/plan.toml").unwrap_err();
        assert!(matches!(err, SplitError::ConfigError { .. }));
    }
}
