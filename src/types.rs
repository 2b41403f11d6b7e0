//! A2A protocol types used by the A2UI extension.
//!
//! Reference: <https://github.com/a2aproject/A2A/blob/main/specification/a2a.proto>
//! Python SDK reference: <https://github.com/a2aproject/a2a-python/blob/main/src/a2a/types.py>
//!
//! Only the subset of the protocol that extension negotiation and A2UI
//! payloads travel through is modelled here: parts, messages, agent cards
//! and the `message/send` parameters. Serialization matches the Python SDK
//! JSON-RPC wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// JSON object used for part payloads and part metadata.
pub type JsonObject = Map<String, Value>;

// ============================================================================
// Enums
// ============================================================================

/// The role of a message sender.
///
/// Proto ref: `enum Role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user / client.
    User,
    /// Message from the agent / server.
    Agent,
    /// Unspecified role.
    Unspecified,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Agent => write!(f, "agent"),
            Role::Unspecified => write!(f, "unspecified"),
        }
    }
}

// ============================================================================
// Message & Parts
// ============================================================================

/// A single message in a conversation.
///
/// Python SDK ref: `Message` (has `kind: Literal['message'] = 'message'`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub message_id: String,

    /// Who sent this message.
    pub role: Role,

    /// Discriminator field: always "message".
    #[serde(default = "kind_message")]
    pub kind: String,

    /// Content parts of the message.
    pub parts: Vec<Part>,

    /// Context this message belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Task this message is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Protocol extensions active for this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// IDs of tasks referenced by this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_task_ids: Option<Vec<String>>,
}

/// File content provided as base64-encoded bytes.
///
/// Python SDK ref: `FileWithBytes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithBytes {
    /// Base64-encoded file content.
    pub bytes: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content provided as a URI reference.
///
/// Python SDK ref: `FileWithUri`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithUri {
    /// URI pointing to the file content.
    pub uri: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content: either inline bytes or a URI reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    /// File with inline base64-encoded bytes.
    Bytes(FileWithBytes),
    /// File referenced by URI.
    Uri(FileWithUri),
}

/// Plain text content.
///
/// Python SDK ref: `TextPart`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPart {
    /// The text content.
    pub text: String,
    /// Optional metadata associated with this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// File content, inline or by reference.
///
/// Python SDK ref: `FilePart`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePart {
    /// The file content (bytes or URI).
    pub file: FileContent,
    /// Optional metadata associated with this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// Structured JSON content.
///
/// `data` is always a JSON object on the wire; arrays and scalars are
/// rejected on deserialization, as in the Python SDK (`dict[str, Any]`).
///
/// Python SDK ref: `DataPart`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPart {
    /// Arbitrary structured data.
    pub data: JsonObject,
    /// Optional metadata associated with this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// A content part within a message.
///
/// Discriminated by the `kind` field, matching the Python SDK's
/// `Part(RootModel[TextPart | FilePart | DataPart])`.
///
/// JSON wire format:
/// - Text: `{"kind": "text", "text": "hello"}`
/// - File (uri): `{"kind": "file", "file": {"uri": "https://example.com/file.pdf"}}`
/// - Data: `{"kind": "data", "data": {"key": "value"}, "metadata": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Part {
    /// Discriminator: `"text"`.
    #[serde(rename = "text")]
    Text(TextPart),
    /// Discriminator: `"file"`.
    #[serde(rename = "file")]
    File(FilePart),
    /// Discriminator: `"data"`.
    #[serde(rename = "data")]
    Data(DataPart),
}

fn kind_message() -> String {
    "message".to_string()
}

// ============================================================================
// Agent Card
// ============================================================================

/// Self-describing manifest for an agent.
///
/// Proto ref: `message AgentCard`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Human-readable name of the agent.
    pub name: String,

    /// Description of the agent's purpose.
    pub description: String,

    /// Agent version string.
    pub version: String,

    /// Primary URL for the agent.
    pub url: String,

    /// Agent capabilities (streaming, push notifications, extensions).
    pub capabilities: AgentCapabilities,

    /// MIME types the agent accepts as input.
    pub default_input_modes: Vec<String>,

    /// MIME types the agent produces as output.
    pub default_output_modes: Vec<String>,

    /// Skills this agent can perform.
    pub skills: Vec<AgentSkill>,

    /// URL to the agent's documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,

    /// A2A protocol version implemented by the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
}

/// Agent capabilities declaration.
///
/// Python SDK ref: `AgentCapabilities`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Whether the agent supports streaming responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,

    /// Whether the agent supports push notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,

    /// Protocol extensions supported by the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<AgentExtension>>,
}

/// A protocol extension supported by the agent.
///
/// Proto ref: `message AgentExtension`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentExtension {
    /// URI identifying the extension.
    pub uri: String,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this extension is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Extension-specific parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// A skill that an agent can perform.
///
/// Proto ref: `message AgentSkill`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    /// Unique skill identifier.
    pub id: String,

    /// Human-readable skill name.
    pub name: String,

    /// Description of what the skill does.
    pub description: String,

    /// Categorization tags.
    pub tags: Vec<String>,

    /// Example prompts/inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

// ============================================================================
// Request Parameters
// ============================================================================

/// Parameters for `message/send` and `message/stream`.
///
/// Python SDK ref: `MessageSendParams`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    /// The message to send.
    pub message: Message,

    /// Optional send configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<SendMessageConfiguration>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Configuration for a `message/send` request.
///
/// Python SDK ref: `MessageSendConfiguration`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageConfiguration {
    /// MIME types the client can accept as output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_output_modes: Option<Vec<String>>,

    /// Maximum number of history messages to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_length: Option<i32>,

    /// Whether the request should block until the task completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking: Option<bool>,
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Part {
    /// Create a text part.
    ///
    /// Produces JSON: `{"kind": "text", "text": "..."}`
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(TextPart {
            text: text.into(),
            metadata: None,
        })
    }

    /// Create a file part from a URI reference.
    pub fn file_from_uri(
        uri: impl Into<String>,
        name: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        Part::File(FilePart {
            file: FileContent::Uri(FileWithUri {
                uri: uri.into(),
                mime_type,
                name,
            }),
            metadata: None,
        })
    }

    /// Create a structured data part without metadata.
    ///
    /// Produces JSON: `{"kind": "data", "data": {...}}`
    pub fn data(data: JsonObject) -> Self {
        Part::Data(DataPart::new(data))
    }

    /// Borrow the data variant, if this is one.
    pub fn as_data(&self) -> Option<&DataPart> {
        match self {
            Part::Data(data_part) => Some(data_part),
            _ => None,
        }
    }

    /// Borrow the part's metadata, whatever the variant.
    pub fn metadata(&self) -> Option<&JsonObject> {
        match self {
            Part::Text(p) => p.metadata.as_ref(),
            Part::File(p) => p.metadata.as_ref(),
            Part::Data(p) => p.metadata.as_ref(),
        }
    }
}

impl DataPart {
    /// A data part with no metadata.
    pub fn new(data: JsonObject) -> Self {
        DataPart {
            data,
            metadata: None,
        }
    }

    /// A data part carrying the given metadata.
    pub fn with_metadata(data: JsonObject, metadata: JsonObject) -> Self {
        DataPart {
            data,
            metadata: Some(metadata),
        }
    }
}

impl From<DataPart> for Part {
    fn from(part: DataPart) -> Self {
        Part::Data(part)
    }
}

impl From<TextPart> for Part {
    fn from(part: TextPart) -> Self {
        Part::Text(part)
    }
}

impl Message {
    /// Create a new user message with text content.
    pub fn user(message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_parts(message_id, Role::User, vec![Part::text(text)])
    }

    /// Create a new agent message with text content.
    pub fn agent(message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_parts(message_id, Role::Agent, vec![Part::text(text)])
    }

    /// Create a message from arbitrary parts.
    pub fn with_parts(message_id: impl Into<String>, role: Role, parts: Vec<Part>) -> Self {
        Message {
            message_id: message_id.into(),
            role,
            kind: kind_message(),
            parts,
            context_id: None,
            task_id: None,
            metadata: None,
            extensions: None,
            reference_task_ids: None,
        }
    }
}
