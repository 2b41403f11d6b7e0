//! What each side of a conversation can render.
//!
//! Clients describe the component catalogs they support in message metadata
//! under [`A2UI_CLIENT_CAPABILITIES_KEY`]. Agents describe theirs in the
//! params of the A2UI [`AgentExtension`](crate::types::AgentExtension) on
//! their card.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::extension::{
    A2UI_CLIENT_CAPABILITIES_KEY, A2UI_EXTENSION_URI, AGENT_EXTENSION_ACCEPTS_INLINE_CATALOGS_KEY,
    AGENT_EXTENSION_SUPPORTED_CATALOG_IDS_KEY,
};
use crate::error::A2uiResult;
use crate::server::RequestContext;
use crate::types::{AgentCard, Message};

/// A2UI rendering capabilities sent by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    /// Catalog ids the client can render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_catalog_ids: Option<Vec<String>>,

    /// A catalog definition sent inline, either as JSON or as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_catalogs: Option<Value>,
}

impl ClientCapabilities {
    /// Capabilities listing the given catalog ids.
    pub fn with_catalog_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_catalog_ids: Some(ids.into_iter().map(Into::into).collect()),
            inline_catalogs: None,
        }
    }

    /// Reads client capabilities from a metadata object.
    ///
    /// Returns `None` when the key is absent or null. A value that does not
    /// decode as capabilities is logged and treated as absent.
    pub fn from_metadata(metadata: Option<&Value>) -> Option<Self> {
        let raw = metadata?.get(A2UI_CLIENT_CAPABILITIES_KEY)?;
        if raw.is_null() {
            return None;
        }
        match serde_json::from_value(raw.clone()) {
            Ok(caps) => Some(caps),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed A2UI client capabilities");
                None
            }
        }
    }

    /// Client capabilities carried by a message.
    pub fn from_message(message: &Message) -> Option<Self> {
        Self::from_metadata(message.metadata.as_ref())
    }

    /// Client capabilities carried by the request's message.
    pub fn from_request(context: &RequestContext) -> Option<Self> {
        context.message.as_ref().and_then(Self::from_message)
    }

    /// Catalog ids the client supports; empty when none were sent.
    pub fn catalog_ids(&self) -> &[String] {
        self.supported_catalog_ids.as_deref().unwrap_or_default()
    }

    /// Whether the client listed `catalog_id`.
    pub fn supports_catalog(&self, catalog_id: &str) -> bool {
        self.catalog_ids().iter().any(|id| id == catalog_id)
    }

    /// The inline catalog as JSON.
    ///
    /// A string value is parsed as JSON; an empty string or null counts as
    /// no inline catalog.
    pub fn inline_catalog(&self) -> A2uiResult<Option<Value>> {
        match &self.inline_catalogs {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(serde_json::from_str(s)?)),
            Some(other) => Ok(Some(other.clone())),
        }
    }

    /// Stores these capabilities in the message metadata.
    ///
    /// Creates the metadata object when missing. Metadata that is not a JSON
    /// object is replaced.
    pub fn attach_to_message(&self, message: &mut Message) {
        let value = match serde_json::to_value(self) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "could not encode A2UI client capabilities");
                return;
            }
        };
        let metadata = message
            .metadata
            .get_or_insert_with(|| Value::Object(Map::new()));
        if !metadata.is_object() {
            *metadata = Value::Object(Map::new());
        }
        if let Some(map) = metadata.as_object_mut() {
            map.insert(A2UI_CLIENT_CAPABILITIES_KEY.to_string(), value);
        }
        tracing::debug!(message_id = %message.message_id, "attached A2UI client capabilities");
    }
}

/// A2UI support advertised by one or more agents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentA2uiSupport {
    /// Catalog ids the agents can emit, in first-seen order, without duplicates.
    pub supported_catalog_ids: Vec<String>,

    /// Whether any agent accepts client inline catalogs.
    pub accepts_inline_catalogs: bool,
}

impl AgentA2uiSupport {
    /// A2UI support declared on `card`, or `None` if the card does not list
    /// the A2UI extension.
    pub fn from_card(card: &AgentCard) -> Option<Self> {
        let extensions = card.capabilities.extensions.as_ref()?;
        let mut support = None;
        for ext in extensions.iter().filter(|ext| ext.uri == A2UI_EXTENSION_URI) {
            support
                .get_or_insert_with(Self::default)
                .merge_params(ext.params.as_ref());
        }
        support
    }

    /// Combined support across several cards, as an orchestrator fronting
    /// them would advertise it.
    pub fn aggregate<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a AgentCard>,
    {
        let mut combined = Self::default();
        for support in cards.into_iter().filter_map(Self::from_card) {
            for id in support.supported_catalog_ids {
                combined.push_catalog_id(id);
            }
            combined.accepts_inline_catalogs |= support.accepts_inline_catalogs;
        }
        combined
    }

    fn merge_params(&mut self, params: Option<&Value>) {
        let Some(params) = params else {
            return;
        };
        if let Some(ids) = params
            .get(AGENT_EXTENSION_SUPPORTED_CATALOG_IDS_KEY)
            .and_then(Value::as_array)
        {
            for id in ids.iter().filter_map(Value::as_str) {
                self.push_catalog_id(id.to_string());
            }
        }
        self.accepts_inline_catalogs |= params
            .get(AGENT_EXTENSION_ACCEPTS_INLINE_CATALOGS_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false);
    }

    fn push_catalog_id(&mut self, id: String) {
        if !self.supported_catalog_ids.contains(&id) {
            self.supported_catalog_ids.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_catalog_string_is_parsed() {
        let caps = ClientCapabilities {
            supported_catalog_ids: None,
            inline_catalogs: Some(json!(r#"{"Button": {}}"#)),
        };
        assert_eq!(caps.inline_catalog().unwrap(), Some(json!({"Button": {}})));
    }

    #[test]
    fn inline_catalog_blank_string_is_absent() {
        let caps = ClientCapabilities {
            supported_catalog_ids: None,
            inline_catalogs: Some(json!("  ")),
        };
        assert_eq!(caps.inline_catalog().unwrap(), None);
    }

    #[test]
    fn inline_catalog_bad_string_is_error() {
        let caps = ClientCapabilities {
            supported_catalog_ids: None,
            inline_catalogs: Some(json!("{not json")),
        };
        assert!(caps.inline_catalog().is_err());
    }

    #[test]
    fn catalog_ids_default_to_empty() {
        assert!(ClientCapabilities::default().catalog_ids().is_empty());
        assert!(!ClientCapabilities::default().supports_catalog("urn:c"));
    }

    #[test]
    fn null_capabilities_are_absent() {
        let metadata = json!({"a2uiClientCapabilities": null});
        assert_eq!(ClientCapabilities::from_metadata(Some(&metadata)), None);
    }
}
