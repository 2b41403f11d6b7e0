//! Carrying A2UI parts through text-only channels.
//!
//! LLM conversation history holds text, so an orchestrator that forwards
//! A2UI parts to a sub-agent's model serializes them into text parts, and
//! recognises them again when they come back.

use super::extension::is_a2ui_part;
use crate::types::Part;

/// Serializes an A2UI part into a text part holding its JSON.
///
/// Returns `None` for parts that are not A2UI.
pub fn a2ui_part_to_text_part(part: &Part) -> Option<Part> {
    if !is_a2ui_part(part) {
        return None;
    }
    match serde_json::to_string(part) {
        Ok(text) => {
            tracing::debug!(len = text.len(), "converted A2UI part to text");
            Some(Part::text(text))
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not serialize A2UI part");
            None
        }
    }
}

/// Recovers an A2UI part from a text part holding its JSON.
///
/// Returns `None` for non-text parts, text that is not a serialized part
/// (the common case for ordinary text), and serialized parts that are not
/// A2UI.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{a2ui_part_to_text_part, create_a2ui_part, text_part_to_a2ui_part};
/// use a2ui_a2a::types::Part;
/// use serde_json::json;
///
/// let ui = create_a2ui_part(json!({"deleteSurface": {"surfaceId": "s1"}}).as_object().cloned().unwrap());
/// let text = a2ui_part_to_text_part(&ui).unwrap();
/// assert_eq!(text_part_to_a2ui_part(&text), Some(ui));
/// assert_eq!(text_part_to_a2ui_part(&Part::text("hello")), None);
/// ```
pub fn text_part_to_a2ui_part(part: &Part) -> Option<Part> {
    let Part::Text(text_part) = part else {
        return None;
    };
    let parsed: Part = serde_json::from_str(&text_part.text).ok()?;
    if is_a2ui_part(&parsed) {
        tracing::debug!("converted text to A2UI part");
        Some(parsed)
    } else {
        None
    }
}
