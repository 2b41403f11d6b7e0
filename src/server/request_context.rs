//! Request contexts: what an agent sees of an incoming request.
//!
//! - [`ServerCallContext`]: mirrors Python SDK's `ServerCallContext` from
//!   `a2a.server.context`
//! - [`RequestContext`]: mirrors Python SDK's `RequestContext` from
//!   `a2a.server.agent_execution.context`
//! - [`RequestContextBuilder`] trait + [`SimpleRequestContextBuilder`]: mirrors
//!   Python SDK's `RequestContextBuilder` and `SimpleRequestContextBuilder`
//!
//! Extension negotiation lives here: the transport layer records which
//! extensions the client asked for, and agent code (for example
//! [`try_activate_a2ui_extension`](crate::a2ui::try_activate_a2ui_extension))
//! marks the ones it actually honours.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::A2uiResult;
use crate::types::{Message, Part, SendMessageConfiguration, SendMessageParams};
use crate::utils::get_requested_extensions;

// ---------------------------------------------------------------------------
// ServerCallContext: per-request server-side context
// ---------------------------------------------------------------------------

/// Server call context: per-request context with state and extensions.
#[derive(Debug, Clone, Default)]
pub struct ServerCallContext {
    /// Arbitrary per-request state.
    pub state: HashMap<String, Value>,

    /// Extensions that the client requested to activate.
    pub requested_extensions: HashSet<String>,

    /// Extensions that have been activated for this request.
    pub activated_extensions: HashSet<String>,
}

impl ServerCallContext {
    /// Build a call context from raw `X-A2A-Extensions` header values.
    ///
    /// # Example
    ///
    /// ```
    /// use a2ui_a2a::server::ServerCallContext;
    ///
    /// let ctx = ServerCallContext::from_extension_headers(&["urn:a, urn:b".to_string()]);
    /// assert!(ctx.requested_extensions.contains("urn:b"));
    /// assert!(ctx.activated_extensions.is_empty());
    /// ```
    pub fn from_extension_headers(values: &[String]) -> Self {
        Self {
            requested_extensions: get_requested_extensions(values),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// RequestContext: agent execution context
// ---------------------------------------------------------------------------

/// Context for an agent execution request.
///
/// Contains the task identifiers, the incoming message, the send
/// configuration and the call context carrying extension negotiation state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this task.
    pub task_id: String,

    /// Conversation context identifier: groups related tasks.
    pub context_id: String,

    /// The incoming user message that triggered this execution.
    /// `None` for cancel requests.
    pub message: Option<Message>,

    /// Optional configuration from the client request (output modes, blocking, etc.).
    pub configuration: Option<SendMessageConfiguration>,

    /// Optional metadata from the client request.
    pub metadata: Option<Value>,

    /// Server call context with per-request state and extensions.
    pub call_context: Option<ServerCallContext>,
}

impl RequestContext {
    /// A context for `message` with the given ids and no call context.
    pub fn new(task_id: impl Into<String>, context_id: impl Into<String>, message: Message) -> Self {
        Self {
            task_id: task_id.into(),
            context_id: context_id.into(),
            message: Some(message),
            configuration: None,
            metadata: None,
            call_context: None,
        }
    }

    /// Attach a call context.
    pub fn with_call_context(mut self, call_context: ServerCallContext) -> Self {
        self.call_context = Some(call_context);
        self
    }

    /// Extracts text content from the user's message parts.
    ///
    /// Returns a single string containing all text content from the user message,
    /// joined by the specified delimiter. Returns an empty string if no message
    /// is present or if it contains no text parts.
    pub fn get_user_input(&self, delimiter: &str) -> String {
        let Some(ref message) = self.message else {
            return String::new();
        };

        message
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(p) => Some(p.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Add an extension to the set of activated extensions for this request.
    ///
    /// This causes the extension to be indicated back to the client in the
    /// response. A no-op when the context has no call context.
    pub fn add_activated_extension(&mut self, uri: impl Into<String>) {
        if let Some(ref mut ctx) = self.call_context {
            ctx.activated_extensions.insert(uri.into());
        }
    }

    /// Extensions that the client requested to activate.
    pub fn requested_extensions(&self) -> HashSet<String> {
        self.call_context
            .as_ref()
            .map(|ctx| ctx.requested_extensions.clone())
            .unwrap_or_default()
    }

    /// Extensions activated so far for this request.
    pub fn activated_extensions(&self) -> HashSet<String> {
        self.call_context
            .as_ref()
            .map(|ctx| ctx.activated_extensions.clone())
            .unwrap_or_default()
    }

    /// Whether the client asked for `uri`.
    pub fn is_extension_requested(&self, uri: &str) -> bool {
        self.call_context
            .as_ref()
            .is_some_and(|ctx| ctx.requested_extensions.contains(uri))
    }
}

// ---------------------------------------------------------------------------
// RequestContextBuilder: builds RequestContext from request params
// ---------------------------------------------------------------------------

/// Builder for constructing [`RequestContext`] from request parameters.
#[async_trait]
pub trait RequestContextBuilder: Send + Sync {
    /// Build a [`RequestContext`] from the given parameters.
    async fn build(
        &self,
        params: Option<&SendMessageParams>,
        task_id: Option<&str>,
        context_id: Option<&str>,
        call_context: Option<ServerCallContext>,
    ) -> A2uiResult<RequestContext>;
}

/// Default [`RequestContextBuilder`].
///
/// Task and context ids are taken from the explicit arguments first, then
/// from the incoming message, and are freshly generated (UUID v4) when
/// neither supplies one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRequestContextBuilder;

impl SimpleRequestContextBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestContextBuilder for SimpleRequestContextBuilder {
    async fn build(
        &self,
        params: Option<&SendMessageParams>,
        task_id: Option<&str>,
        context_id: Option<&str>,
        call_context: Option<ServerCallContext>,
    ) -> A2uiResult<RequestContext> {
        let resolved_task_id = task_id
            .map(|s| s.to_string())
            .or_else(|| params.and_then(|p| p.message.task_id.clone()))
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let resolved_context_id = context_id
            .map(|s| s.to_string())
            .or_else(|| params.and_then(|p| p.message.context_id.clone()))
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        tracing::debug!(
            task_id = %resolved_task_id,
            context_id = %resolved_context_id,
            "built request context"
        );

        Ok(RequestContext {
            task_id: resolved_task_id,
            context_id: resolved_context_id,
            message: params.map(|p| p.message.clone()),
            configuration: params.and_then(|p| p.configuration.clone()),
            metadata: params.and_then(|p| p.metadata.clone()),
            call_context,
        })
    }
}
