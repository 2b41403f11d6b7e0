//! The A2UI extension for A2A: tagging, detection, advertising and activation.
//!
//! An A2UI payload travels as an ordinary [`DataPart`] whose metadata carries
//! `mimeType: application/json+a2ui`. Producers tag payloads with
//! [`create_a2ui_part`]; consumers recognise them with [`is_a2ui_part`] and
//! borrow them with [`get_a2ui_data_part`]. Any consumer, in any language,
//! that sees this marker on a data part treats it as A2UI.

use serde_json::{json, Map, Value};

use crate::server::RequestContext;
use crate::types::{AgentExtension, DataPart, JsonObject, Part};

/// URI identifying the A2UI extension in agent cards and `X-A2A-Extensions`.
pub const A2UI_EXTENSION_URI: &str = "https://a2ui.org/a2a-extension/a2ui/v0.8";

/// Part metadata key holding the payload's MIME type.
pub const MIME_TYPE_KEY: &str = "mimeType";

/// MIME type marking a data part as an A2UI payload.
pub const A2UI_MIME_TYPE: &str = "application/json+a2ui";

/// Message metadata key under which clients send their A2UI capabilities.
pub const A2UI_CLIENT_CAPABILITIES_KEY: &str = "a2uiClientCapabilities";

/// Client capabilities key listing the catalog ids the client can render.
pub const SUPPORTED_CATALOG_IDS_KEY: &str = "supportedCatalogIds";

/// Client capabilities key carrying an inline catalog definition.
pub const INLINE_CATALOGS_KEY: &str = "inlineCatalogs";

/// Agent extension param listing the catalog ids the agent can emit.
pub const AGENT_EXTENSION_SUPPORTED_CATALOG_IDS_KEY: &str = "supportedCatalogIds";

/// Agent extension param set when the agent accepts client inline catalogs.
pub const AGENT_EXTENSION_ACCEPTS_INLINE_CATALOGS_KEY: &str = "acceptsInlineCatalogs";

/// Id of the standard A2UI v0.8 component catalog.
pub const STANDARD_CATALOG_ID: &str =
    "https://github.com/google/A2UI/blob/main/specification/v0_8/json/standard_catalog_definition.json";

const A2UI_EXTENSION_DESCRIPTION: &str = "Provides agent driven UI using the A2UI JSON format.";

/// Wraps A2UI data in a data part tagged with the A2UI MIME type.
///
/// The metadata is always fresh and holds exactly the marker entry. The
/// payload is moved into the part, not copied.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{create_a2ui_data_part, A2UI_MIME_TYPE, MIME_TYPE_KEY};
/// use serde_json::json;
///
/// let data = json!({"beginRendering": {"surfaceId": "s1", "root": "root"}});
/// let part = create_a2ui_data_part(data.as_object().cloned().unwrap());
/// let metadata = part.metadata.as_ref().unwrap();
/// assert_eq!(metadata.len(), 1);
/// assert_eq!(metadata[MIME_TYPE_KEY], A2UI_MIME_TYPE);
/// ```
pub fn create_a2ui_data_part(a2ui_data: JsonObject) -> DataPart {
    let mut metadata = Map::new();
    metadata.insert(
        MIME_TYPE_KEY.to_string(),
        Value::String(A2UI_MIME_TYPE.to_string()),
    );
    DataPart::with_metadata(a2ui_data, metadata)
}

/// Like [`create_a2ui_data_part`], already wrapped as a [`Part`].
pub fn create_a2ui_part(a2ui_data: JsonObject) -> Part {
    Part::Data(create_a2ui_data_part(a2ui_data))
}

/// Checks if a part carries A2UI data.
///
/// True only for a data part whose metadata maps `mimeType` to exactly
/// `application/json+a2ui`. Every other part, including data parts without
/// metadata or with another MIME type, is not A2UI.
pub fn is_a2ui_part(part: &Part) -> bool {
    get_a2ui_data_part(part).is_some()
}

/// Borrows the A2UI data part inside `part`, if it is one.
///
/// The returned reference points at the same data part; nothing is copied.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{create_a2ui_part, get_a2ui_data_part};
/// use a2ui_a2a::types::Part;
/// use serde_json::json;
///
/// let data = json!({"deleteSurface": {"surfaceId": "s1"}}).as_object().cloned().unwrap();
/// let part = create_a2ui_part(data.clone());
/// assert_eq!(get_a2ui_data_part(&part).map(|p| &p.data), Some(&data));
/// assert!(get_a2ui_data_part(&Part::text("this is some text")).is_none());
/// ```
pub fn get_a2ui_data_part(part: &Part) -> Option<&DataPart> {
    match part {
        Part::Data(data_part) if has_a2ui_mime_type(data_part) => Some(data_part),
        _ => None,
    }
}

/// Takes ownership of the A2UI data part inside `part`.
///
/// Parts that are not A2UI are handed back unchanged in `Err`.
pub fn take_a2ui_data_part(part: Part) -> Result<DataPart, Part> {
    match part {
        Part::Data(data_part) if has_a2ui_mime_type(&data_part) => Ok(data_part),
        other => Err(other),
    }
}

fn has_a2ui_mime_type(part: &DataPart) -> bool {
    part.metadata
        .as_ref()
        .and_then(|metadata| metadata.get(MIME_TYPE_KEY))
        .and_then(Value::as_str)
        == Some(A2UI_MIME_TYPE)
}

/// The `beginRendering.surfaceId` of an A2UI payload, if it opens a surface.
///
/// Orchestrators use this to remember which agent owns a surface so that
/// later user actions on it can be routed back there.
pub fn begin_rendering_surface_id(part: &DataPart) -> Option<&str> {
    part.data
        .get("beginRendering")?
        .get("surfaceId")?
        .as_str()
}

/// The `AgentExtension` entry advertising A2UI support on an agent card.
///
/// `params` is omitted entirely when the agent neither accepts inline
/// catalogs nor lists supported catalog ids.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{get_a2ui_agent_extension, A2UI_EXTENSION_URI, STANDARD_CATALOG_ID};
///
/// let bare = get_a2ui_agent_extension(false, &[] as &[&str]);
/// assert_eq!(bare.uri, A2UI_EXTENSION_URI);
/// assert!(bare.params.is_none());
///
/// let ext = get_a2ui_agent_extension(false, &[STANDARD_CATALOG_ID]);
/// assert_eq!(ext.params.unwrap()["supportedCatalogIds"][0], STANDARD_CATALOG_ID);
/// ```
pub fn get_a2ui_agent_extension<S: AsRef<str>>(
    accepts_inline_catalogs: bool,
    supported_catalog_ids: &[S],
) -> AgentExtension {
    let mut params = Map::new();
    if accepts_inline_catalogs {
        params.insert(
            AGENT_EXTENSION_ACCEPTS_INLINE_CATALOGS_KEY.to_string(),
            Value::Bool(true),
        );
    }
    if !supported_catalog_ids.is_empty() {
        let ids: Vec<&str> = supported_catalog_ids.iter().map(AsRef::as_ref).collect();
        params.insert(
            AGENT_EXTENSION_SUPPORTED_CATALOG_IDS_KEY.to_string(),
            json!(ids),
        );
    }

    AgentExtension {
        uri: A2UI_EXTENSION_URI.to_string(),
        description: Some(A2UI_EXTENSION_DESCRIPTION.to_string()),
        required: None,
        params: (!params.is_empty()).then_some(Value::Object(params)),
    }
}

/// Activates the A2UI extension for this request if the client asked for it.
///
/// Returns whether A2UI is in use. When it is, the extension URI is added
/// to the request's activated extensions so it gets echoed to the client.
pub fn try_activate_a2ui_extension(context: &mut RequestContext) -> bool {
    if context.is_extension_requested(A2UI_EXTENSION_URI) {
        context.add_activated_extension(A2UI_EXTENSION_URI);
        tracing::info!(task_id = %context.task_id, "A2UI extension activated");
        true
    } else {
        tracing::debug!(task_id = %context.task_id, "A2UI extension not requested");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerCallContext;
    use crate::types::Message;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn constants_are_wire_exact() {
        assert_eq!(A2UI_EXTENSION_URI, "https://a2ui.org/a2a-extension/a2ui/v0.8");
        assert_eq!(MIME_TYPE_KEY, "mimeType");
        assert_eq!(A2UI_MIME_TYPE, "application/json+a2ui");
    }

    #[test]
    fn tagging_empty_payload_is_detected() {
        let part = create_a2ui_part(Map::new());
        assert!(is_a2ui_part(&part));
    }

    #[test]
    fn mime_type_comparison_is_case_sensitive() {
        let part = Part::Data(DataPart::with_metadata(
            Map::new(),
            object(json!({"mimeType": "Application/JSON+A2UI"})),
        ));
        assert!(!is_a2ui_part(&part));
    }

    #[test]
    fn non_string_mime_type_is_not_a2ui() {
        let part = Part::Data(DataPart::with_metadata(
            Map::new(),
            object(json!({"mimeType": ["application/json+a2ui"]})),
        ));
        assert!(!is_a2ui_part(&part));
        assert!(get_a2ui_data_part(&part).is_none());
    }

    #[test]
    fn take_returns_original_part_when_not_a2ui() {
        let part = Part::text("plain");
        let back = take_a2ui_data_part(part.clone()).unwrap_err();
        assert_eq!(back, part);
    }

    #[test]
    fn take_moves_tagged_data_out() {
        let data = object(json!({"surfaceUpdate": {"surfaceId": "s"}}));
        let taken = take_a2ui_data_part(create_a2ui_part(data.clone())).unwrap();
        assert_eq!(taken.data, data);
    }

    #[test]
    fn surface_id_from_begin_rendering() {
        let part = create_a2ui_data_part(object(
            json!({"beginRendering": {"surfaceId": "test-surface", "root": "root-column"}}),
        ));
        assert_eq!(begin_rendering_surface_id(&part), Some("test-surface"));

        let other = create_a2ui_data_part(object(json!({"deleteSurface": {"surfaceId": "x"}})));
        assert_eq!(begin_rendering_surface_id(&other), None);
    }

    #[test]
    fn agent_extension_with_inline_catalogs_only() {
        let ext = get_a2ui_agent_extension(true, &[] as &[String]);
        assert_eq!(ext.params, Some(json!({"acceptsInlineCatalogs": true})));
        assert_eq!(ext.description.as_deref(), Some(A2UI_EXTENSION_DESCRIPTION));
    }

    #[test]
    fn activation_requires_request() {
        let mut ctx = RequestContext::new("t1", "c1", Message::user("m1", "hi"))
            .with_call_context(ServerCallContext::default());
        assert!(!try_activate_a2ui_extension(&mut ctx));
        assert!(ctx.activated_extensions().is_empty());
    }
}
