//! Turns the model's raw reply text into canonical `BillItem`s.
//!
//! Two historical reply schemas are supported and decoded as a tagged union:
//! an object carrying `items` plus aggregate `cgst`/`sgst` tax fields, and a
//! flat array of items where tax lines are flagged `isTax`. Both are
//! normalized here; nothing downstream branches on schema.

use crate::domain::model::{round2, BillItem};
use crate::utils::error::{Result, SplitError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: f64,
    #[serde(default, rename = "isTax")]
    is_tax: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ModelReply {
    Aggregated {
        #[serde(default)]
        items: Vec<RawItem>,
        #[serde(default)]
        cgst: f64,
        #[serde(default)]
        sgst: f64,
    },
    Flat(Vec<RawItem>),
}

/// Parses free-form model output into bill items.
///
/// Tries a direct parse of the whole text first; models often wrap the JSON
/// in prose, so on failure the first balanced `[...]` or `{...}` substring is
/// parsed instead. Only when both attempts fail is the reply rejected.
pub fn parse_model_text(text: &str) -> Result<Vec<BillItem>> {
    let reply = decode_reply(text)?;
    Ok(normalize(reply))
}

fn decode_reply(text: &str) -> Result<ModelReply> {
    if let Ok(reply) = serde_json::from_str::<ModelReply>(text.trim()) {
        return Ok(reply);
    }

    if let Some(candidate) = first_balanced_structure(text) {
        tracing::debug!(
            "Full reply was not valid JSON, retrying with embedded structure ({} chars)",
            candidate.len()
        );
        if let Ok(reply) = serde_json::from_str::<ModelReply>(candidate) {
            return Ok(reply);
        }
    }

    Err(SplitError::parse(format!(
        "reply did not contain a recognizable item list: {}",
        truncate_for_log(text)
    )))
}

/// Returns the first balanced bracket-delimited substring, honoring JSON
/// string literals and escapes so brackets inside descriptions do not
/// terminate the scan.
fn first_balanced_structure(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|&b| b == b'[' || b == b'{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn normalize(reply: ModelReply) -> Vec<BillItem> {
    match reply {
        ModelReply::Aggregated { items, cgst, sgst } => {
            // Aggregate tax is pre-distributed into item prices.
            let per_item_share = if items.is_empty() {
                0.0
            } else {
                (cgst + sgst) / items.len() as f64
            };
            items
                .into_iter()
                .enumerate()
                .map(|(i, raw)| BillItem {
                    id: (i + 1).to_string(),
                    description: raw.description,
                    price: round2(raw.price + per_item_share),
                    is_shared: false,
                })
                .collect()
        }
        ModelReply::Flat(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, raw)| BillItem {
                id: (i + 1).to_string(),
                description: raw.description,
                price: raw.price,
                is_shared: raw.is_tax,
            })
            .collect(),
    }
}

fn truncate_for_log(text: &str) -> String {
    const LIMIT: usize = 120;
    if text.len() <= LIMIT {
        text.to_string()
    } else {
        let mut end = LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
