//! Tests for utils::message module

use a2ui_a2a::a2ui::{create_a2ui_part, is_a2ui_part};
use a2ui_a2a::types::{Message, Part, Role};
use a2ui_a2a::utils::{get_message_text, new_agent_parts_message, new_agent_text_message};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_new_agent_text_message_basic() {
    let text = "Hello, I'm an agent";

    let message = new_agent_text_message(text, None::<String>, None::<String>);

    assert_eq!(message.role, Role::Agent);
    assert_eq!(message.kind, "message");
    assert_eq!(message.parts, vec![Part::text(text)]);
    assert!(Uuid::parse_str(&message.message_id).is_ok());
    assert!(message.task_id.is_none());
    assert!(message.context_id.is_none());
}

#[test]
fn test_new_agent_text_message_with_ids() {
    let message = new_agent_text_message("hi", Some("test-context-id"), Some("test-task-id"));

    assert_eq!(message.context_id.as_deref(), Some("test-context-id"));
    assert_eq!(message.task_id.as_deref(), Some("test-task-id"));
}

#[test]
fn test_new_agent_text_message_unique_ids() {
    let a = new_agent_text_message("a", None::<String>, None::<String>);
    let b = new_agent_text_message("b", None::<String>, None::<String>);
    assert_ne!(a.message_id, b.message_id);
}

#[test]
fn test_new_agent_parts_message_carries_a2ui() {
    let parts = vec![
        Part::text("Here are the results"),
        create_a2ui_part(
            json!({"beginRendering": {"surfaceId": "s1", "root": "root"}})
                .as_object()
                .cloned()
                .unwrap(),
        ),
    ];

    let message = new_agent_parts_message(parts, Some("ctx"), Some("task"));

    assert_eq!(message.role, Role::Agent);
    assert_eq!(message.parts.len(), 2);
    assert!(is_a2ui_part(&message.parts[1]));

    let wire = serde_json::to_value(&message).unwrap();
    assert_eq!(wire["parts"][1]["metadata"]["mimeType"], "application/json+a2ui");
    assert_eq!(wire["contextId"], "ctx");
    assert_eq!(wire["taskId"], "task");
}

#[test]
fn test_get_message_text_joins_text_parts() {
    let mut message = Message::user("m1", "First line");
    message.parts.push(create_a2ui_part(
        json!({"deleteSurface": {"surfaceId": "s"}})
            .as_object()
            .cloned()
            .unwrap(),
    ));
    message.parts.push(Part::text("Second line"));

    assert_eq!(get_message_text(&message, "\n"), "First line\nSecond line");
}

#[test]
fn test_get_message_text_no_text() {
    let message = new_agent_parts_message(Vec::new(), None::<String>, None::<String>);
    assert_eq!(get_message_text(&message, " "), "");
}
