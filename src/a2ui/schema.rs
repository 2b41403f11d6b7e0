//! A2UI JSON schema manipulation.
//!
//! The A2UI schema describes a single server-to-client message. Agents let
//! their LLM send several at once, so the schema handed to the model is the
//! single-message schema wrapped as an array.

use serde_json::{json, Value};

use crate::error::{A2uiError, A2uiResult};

/// Path from the schema root to the component definition a catalog fills in.
const COMPONENT_SCHEMA_PATH: [&str; 7] = [
    "properties",
    "surfaceUpdate",
    "properties",
    "components",
    "items",
    "properties",
    "component",
];

/// Wraps the A2UI schema in an array schema so multiple messages can be sent.
///
/// # Errors
///
/// [`A2uiError::EmptySchema`] when the schema is null or an empty
/// object, array or string.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::wrap_as_json_array;
/// use serde_json::json;
///
/// let wrapped = wrap_as_json_array(&json!({"type": "object"})).unwrap();
/// assert_eq!(wrapped, json!({"type": "array", "items": {"type": "object"}}));
/// assert!(wrap_as_json_array(&json!({})).is_err());
/// ```
pub fn wrap_as_json_array(a2ui_schema: &Value) -> A2uiResult<Value> {
    if is_empty(a2ui_schema) {
        return Err(A2uiError::EmptySchema);
    }
    Ok(json!({"type": "array", "items": a2ui_schema}))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Validates an A2UI payload against a wrapped schema.
///
/// The payload is checked with a JSON Schema validator, so every
/// constraint in the schema applies (`type`, `required`, `const`, nested
/// `properties` and `items`).
///
/// # Errors
///
/// [`A2uiError::InvalidSchema`] when the schema itself does not compile.
/// [`A2uiError::SchemaValidation`] when the payload violates it; `index`
/// is the first offending item and `message` carries the validator's
/// messages for that item.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{validate_messages, wrap_as_json_array};
/// use serde_json::json;
///
/// let schema = wrap_as_json_array(&json!({
///     "type": "object",
///     "properties": {"text": {"type": "string"}},
///     "required": ["text"]
/// }))
/// .unwrap();
/// assert!(validate_messages(&json!([{"text": "Hi"}]), &schema).is_ok());
///
/// let err = validate_messages(&json!([{"text": "Hi"}, {}]), &schema).unwrap_err();
/// assert!(err.to_string().contains("item 1"));
/// assert!(err.to_string().contains("\"text\" is a required property"));
/// ```
pub fn validate_messages(payload: &Value, wrapped_schema: &Value) -> A2uiResult<()> {
    let validator = jsonschema::validator_for(wrapped_schema)
        .map_err(|e| A2uiError::invalid_schema(e.to_string()))?;

    let mut failures = validator
        .iter_errors(payload)
        .map(|e| (item_index(&e.instance_path.to_string()), e.to_string()));
    let Some((index, first)) = failures.next() else {
        return Ok(());
    };

    let mut messages = vec![first];
    messages.extend(
        failures
            .filter(|(other, _)| *other == index)
            .map(|(_, message)| message),
    );
    Err(A2uiError::validation(index, messages.join("; ")))
}

/// Array index named by the first segment of a JSON pointer, or 0 for
/// errors on the payload as a whole.
fn item_index(instance_path: &str) -> usize {
    instance_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Replaces the component definitions in `a2ui_schema` with `catalog`.
///
/// # Errors
///
/// [`A2uiError::InvalidSchema`] when the schema lacks the
/// `surfaceUpdate` component path.
pub fn inject_catalog(a2ui_schema: &mut Value, catalog: Value) -> A2uiResult<()> {
    let mut node = a2ui_schema;
    for segment in COMPONENT_SCHEMA_PATH {
        node = node.get_mut(segment).ok_or_else(|| {
            A2uiError::invalid_schema(format!(
                "missing '{}' on the surfaceUpdate component path",
                segment
            ))
        })?;
    }
    let component = node
        .as_object_mut()
        .ok_or_else(|| A2uiError::invalid_schema("component definition is not an object"))?;
    component.insert("properties".to_string(), catalog);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_rejects_null() {
        assert_eq!(wrap_as_json_array(&Value::Null), Err(A2uiError::EmptySchema));
    }

    #[test]
    fn validate_rejects_non_array() {
        let schema = json!({"type": "array", "items": {"type": "object"}});
        match validate_messages(&json!({"beginRendering": {}}), &schema) {
            Err(A2uiError::SchemaValidation { index, message }) => {
                assert_eq!(index, 0);
                assert!(message.contains("is not of type"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn validate_reports_offending_index() {
        let schema = json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {"beginRendering": {"type": "object"}},
                "additionalProperties": false
            }
        });
        let payload = json!([{"beginRendering": {}}, {"bogus": {}}]);
        match validate_messages(&payload, &schema) {
            Err(A2uiError::SchemaValidation { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("bogus"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn validate_checks_nested_constraints() {
        let schema = json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "surfaceUpdate": {
                        "type": "object",
                        "properties": {"components": {"type": "array"}},
                        "required": ["components"]
                    }
                }
            }
        });
        let payload = json!([{"surfaceUpdate": {"components": []}}, {"surfaceUpdate": {}}]);
        match validate_messages(&payload, &schema) {
            Err(A2uiError::SchemaValidation { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("\"components\" is a required property"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_uncompilable_schema() {
        let schema = json!({"type": "array", "items": {"type": 12}});
        assert!(matches!(
            validate_messages(&json!([]), &schema),
            Err(A2uiError::InvalidSchema(_))
        ));
    }

    #[test]
    fn item_index_reads_first_pointer_segment() {
        assert_eq!(item_index("/3/text"), 3);
        assert_eq!(item_index(""), 0);
        assert_eq!(item_index("/x"), 0);
    }
}
