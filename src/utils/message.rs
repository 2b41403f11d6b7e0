//! Utility functions for creating and handling A2A Message objects.

use crate::types::{Message, Part, Role};
use crate::utils::parts::get_text_parts;
use uuid::Uuid;

/// Creates a new agent message containing a single text Part.
///
/// # Example
///
/// ```
/// use a2ui_a2a::utils::new_agent_text_message;
///
/// let message = new_agent_text_message("Hello, I'm an agent", None::<String>, None::<String>);
/// assert_eq!(message.role, a2ui_a2a::types::Role::Agent);
/// ```
pub fn new_agent_text_message(
    text: impl Into<String>,
    context_id: Option<impl Into<String>>,
    task_id: Option<impl Into<String>>,
) -> Message {
    new_agent_parts_message(vec![Part::text(text)], context_id, task_id)
}

/// Creates a new agent message containing a list of Parts.
///
/// This is how an agent ships A2UI parts back to the client: one message,
/// one tagged data part per A2UI message.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::create_a2ui_part;
/// use a2ui_a2a::utils::new_agent_parts_message;
/// use serde_json::json;
///
/// let ui = json!({"beginRendering": {"surfaceId": "s1", "root": "r"}});
/// let parts = vec![create_a2ui_part(ui.as_object().cloned().unwrap())];
/// let message = new_agent_parts_message(parts, Some("ctx-1"), None::<String>);
/// assert_eq!(message.context_id.as_deref(), Some("ctx-1"));
/// ```
pub fn new_agent_parts_message(
    parts: Vec<Part>,
    context_id: Option<impl Into<String>>,
    task_id: Option<impl Into<String>>,
) -> Message {
    let mut message = Message::with_parts(Uuid::new_v4().to_string(), Role::Agent, parts);
    message.context_id = context_id.map(|id| id.into());
    message.task_id = task_id.map(|id| id.into());
    message
}

/// Extracts and joins all text content from a Message's parts.
///
/// Returns an empty string if no text parts are found.
pub fn get_message_text(message: &Message, delimiter: &str) -> String {
    get_text_parts(&message.parts).join(delimiter)
}
