//! The `send_a2ui_json_to_client` tool.
//!
//! One way of getting A2UI out of an LLM: expose a tool whose single string
//! argument is A2UI JSON. The tool validates the JSON against the A2UI
//! schema and returns it; [`convert_tool_event_to_parts`] then turns the tool
//! response into tagged A2UI parts for the client, and swallows the tool
//! call itself so it never reaches the client.
//!
//! Whether the tool is offered, and which schema it validates against, is
//! decided per request by an [`A2uiEnabledProvider`] and an
//! [`A2uiSchemaProvider`].

use async_trait::async_trait;
use serde_json::{json, Value};

use super::capabilities::ClientCapabilities;
use super::catalog::CatalogResolver;
use super::extension::create_a2ui_part;
use super::schema::{validate_messages, wrap_as_json_array};
use crate::error::{A2uiError, A2uiResult};
use crate::server::RequestContext;
use crate::types::Part;

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

/// Decides per request whether A2UI tools are offered.
#[async_trait]
pub trait A2uiEnabledProvider: Send + Sync {
    /// Whether A2UI is enabled for this request.
    async fn is_enabled(&self, context: &RequestContext) -> bool;
}

/// Supplies the (unwrapped) A2UI schema for a request.
#[async_trait]
pub trait A2uiSchemaProvider: Send + Sync {
    /// The single-message A2UI schema to validate against.
    async fn a2ui_schema(&self, context: &RequestContext) -> A2uiResult<Value>;
}

#[async_trait]
impl A2uiEnabledProvider for bool {
    async fn is_enabled(&self, _context: &RequestContext) -> bool {
        *self
    }
}

#[async_trait]
impl A2uiSchemaProvider for Value {
    async fn a2ui_schema(&self, _context: &RequestContext) -> A2uiResult<Value> {
        Ok(self.clone())
    }
}

/// Resolves the schema from the client capabilities in the request message.
#[async_trait]
impl A2uiSchemaProvider for CatalogResolver {
    async fn a2ui_schema(&self, context: &RequestContext) -> A2uiResult<Value> {
        let client = ClientCapabilities::from_request(context);
        self.load_a2ui_schema(client.as_ref())
            .map(|(schema, _)| schema)
    }
}

/// Enabled provider backed by a closure over the request context.
pub struct FnEnabledProvider<F>(pub F);

#[async_trait]
impl<F> A2uiEnabledProvider for FnEnabledProvider<F>
where
    F: Fn(&RequestContext) -> bool + Send + Sync,
{
    async fn is_enabled(&self, context: &RequestContext) -> bool {
        (self.0)(context)
    }
}

/// Schema provider backed by a closure over the request context.
pub struct FnSchemaProvider<F>(pub F);

#[async_trait]
impl<F> A2uiSchemaProvider for FnSchemaProvider<F>
where
    F: Fn(&RequestContext) -> A2uiResult<Value> + Send + Sync,
{
    async fn a2ui_schema(&self, context: &RequestContext) -> A2uiResult<Value> {
        (self.0)(context)
    }
}

// ---------------------------------------------------------------------------
// Toolset
// ---------------------------------------------------------------------------

/// A toolset that offers the A2UI tool only when A2UI is enabled.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{FnEnabledProvider, SendA2uiToClientToolset};
/// use a2ui_a2a::server::RequestContext;
/// use serde_json::json;
///
/// // Offer the tool whenever the client negotiated the extension.
/// let toolset = SendA2uiToClientToolset::new(
///     FnEnabledProvider(|ctx: &RequestContext| !ctx.activated_extensions().is_empty()),
///     json!({"type": "object"}),
/// );
/// assert_eq!(toolset.tool().name(), "send_a2ui_json_to_client");
/// ```
pub struct SendA2uiToClientToolset {
    a2ui_enabled: Box<dyn A2uiEnabledProvider>,
    ui_tool: SendA2uiJsonToClientTool,
}

impl SendA2uiToClientToolset {
    /// Create the toolset from an enablement and a schema provider.
    pub fn new(
        a2ui_enabled: impl A2uiEnabledProvider + 'static,
        a2ui_schema: impl A2uiSchemaProvider + 'static,
    ) -> Self {
        Self {
            a2ui_enabled: Box::new(a2ui_enabled),
            ui_tool: SendA2uiJsonToClientTool::new(a2ui_schema),
        }
    }

    /// The A2UI tool, regardless of enablement.
    pub fn tool(&self) -> &SendA2uiJsonToClientTool {
        &self.ui_tool
    }

    /// Tools to offer for this request: the A2UI tool when enabled, else none.
    ///
    /// Without a request context A2UI is treated as disabled.
    pub async fn get_tools(&self, context: Option<&RequestContext>) -> Vec<&SendA2uiJsonToClientTool> {
        let use_ui = match context {
            Some(ctx) => self.a2ui_enabled.is_enabled(ctx).await,
            None => false,
        };
        if use_ui {
            tracing::info!("A2UI is ENABLED, adding ui tools");
            vec![&self.ui_tool]
        } else {
            tracing::info!("A2UI is DISABLED, not adding ui tools");
            Vec::new()
        }
    }
}

/// The tool an LLM calls to send A2UI JSON to the client.
pub struct SendA2uiJsonToClientTool {
    a2ui_schema: Box<dyn A2uiSchemaProvider>,
}

impl SendA2uiJsonToClientTool {
    /// Tool name as declared to the LLM.
    pub const TOOL_NAME: &'static str = "send_a2ui_json_to_client";
    /// Key of the validated payload in a successful tool response.
    pub const VALIDATED_A2UI_JSON_KEY: &'static str = "validated_a2ui_json";
    /// Name of the tool's single argument.
    pub const A2UI_JSON_ARG_NAME: &'static str = "a2ui_json";
    /// Key of the error message in a failed tool response.
    pub const TOOL_ERROR_KEY: &'static str = "error";

    /// Create the tool around a schema provider.
    pub fn new(a2ui_schema: impl A2uiSchemaProvider + 'static) -> Self {
        Self {
            a2ui_schema: Box::new(a2ui_schema),
        }
    }

    /// The tool name.
    pub fn name(&self) -> &'static str {
        Self::TOOL_NAME
    }

    /// Description shown to the LLM.
    pub fn description(&self) -> String {
        format!(
            "Sends A2UI JSON to the client to render rich UI for the user. \
             This tool can be called multiple times in the same call to render \
             multiple UI surfaces. Args: {}: Valid A2UI JSON Schema to send to the \
             client. The A2UI JSON Schema definition is between \
             ---BEGIN A2UI JSON SCHEMA--- and ---END A2UI JSON SCHEMA--- in the \
             system instructions.",
            Self::A2UI_JSON_ARG_NAME
        )
    }

    /// Function declaration for the LLM: one required string argument.
    pub fn declaration(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": {
                "type": "object",
                "properties": {
                    (Self::A2UI_JSON_ARG_NAME): {
                        "type": "string",
                        "description": "valid A2UI JSON Schema to send to the client."
                    }
                },
                "required": [Self::A2UI_JSON_ARG_NAME]
            }
        })
    }

    /// The provider's schema, wrapped as an array of messages.
    pub async fn get_a2ui_schema(&self, context: &RequestContext) -> A2uiResult<Value> {
        let schema = self.a2ui_schema.a2ui_schema(context).await?;
        wrap_as_json_array(&schema)
    }

    /// System instructions embedding the wrapped schema.
    pub async fn instructions(&self, context: &RequestContext) -> A2uiResult<String> {
        let schema = self.get_a2ui_schema(context).await?;
        let rendered = serde_json::to_string(&schema)?;
        tracing::info!("Added a2ui_schema to system instructions");
        Ok(format!(
            "\n---BEGIN A2UI JSON SCHEMA---\n{}\n---END A2UI JSON SCHEMA---\n",
            rendered
        ))
    }

    /// Run the tool on the LLM's arguments.
    ///
    /// Never fails: problems are reported to the LLM as
    /// `{"error": "..."}`. On success the validated messages are returned
    /// as `{"validated_a2ui_json": [...]}`.
    pub async fn run(&self, args: &Value, context: &RequestContext) -> Value {
        match self.validate_args(args, context).await {
            Ok(payload) => json!({ (Self::VALIDATED_A2UI_JSON_KEY): payload }),
            Err(e) => {
                let err = format!("Failed to call A2UI tool {}: {}", Self::TOOL_NAME, e);
                tracing::error!("{}", err);
                json!({ (Self::TOOL_ERROR_KEY): err })
            }
        }
    }

    async fn validate_args(&self, args: &Value, context: &RequestContext) -> A2uiResult<Value> {
        let a2ui_json = args
            .get(Self::A2UI_JSON_ARG_NAME)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| A2uiError::MissingArgument(Self::A2UI_JSON_ARG_NAME.to_string()))?;

        let mut payload: Value = serde_json::from_str(a2ui_json)?;
        if !payload.is_array() {
            tracing::info!("Received a single JSON object, wrapping in a list for validation.");
            payload = Value::Array(vec![payload]);
        }

        let schema = self.get_a2ui_schema(context).await?;
        validate_messages(&payload, &schema)?;

        tracing::info!(
            "Validated call to tool {} with {}",
            Self::TOOL_NAME,
            Self::A2UI_JSON_ARG_NAME
        );
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Tool events -> A2A parts
// ---------------------------------------------------------------------------

/// A function call or response produced while running the LLM.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    /// The LLM called a tool.
    Call {
        /// Tool name.
        name: String,
        /// Call arguments.
        args: Value,
    },
    /// A tool returned.
    Response {
        /// Tool name.
        name: String,
        /// Tool response body.
        response: Value,
    },
}

/// Converts A2UI tool events into parts for the client.
///
/// Returns `None` for events of other tools so the caller can apply its
/// default conversion. For the A2UI tool, calls yield no parts, failed
/// responses yield no parts, and successful responses yield one tagged
/// A2UI part per validated message.
pub fn convert_tool_event_to_parts(event: &ToolEvent) -> Option<Vec<Part>> {
    match event {
        ToolEvent::Response { name, response } if name == SendA2uiJsonToClientTool::TOOL_NAME => {
            Some(response_to_parts(response))
        }
        ToolEvent::Call { name, .. } if name == SendA2uiJsonToClientTool::TOOL_NAME => {
            Some(Vec::new())
        }
        _ => None,
    }
}

fn response_to_parts(response: &Value) -> Vec<Part> {
    if let Some(err) = response.get(SendA2uiJsonToClientTool::TOOL_ERROR_KEY) {
        tracing::warn!("A2UI tool call failed: {}", err);
        return Vec::new();
    }

    let messages = match response
        .get(SendA2uiJsonToClientTool::VALIDATED_A2UI_JSON_KEY)
        .and_then(Value::as_array)
    {
        Some(messages) if !messages.is_empty() => messages,
        _ => {
            tracing::info!("No result in A2UI tool response");
            return Vec::new();
        }
    };

    tracing::info!(
        "Found {} messages. Creating individual DataParts.",
        messages.len()
    );
    messages
        .iter()
        .filter_map(|message| match message.as_object() {
            Some(data) => Some(create_a2ui_part(data.clone())),
            None => {
                tracing::warn!("skipping non-object A2UI message");
                None
            }
        })
        .collect()
}
