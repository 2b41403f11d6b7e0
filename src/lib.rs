//! # a2ui-a2a: the A2UI extension for the Agent-to-Agent (A2A) protocol
//!
//! [A2UI](https://a2ui.org) lets an agent describe user interface as JSON
//! that the client renders natively. Over [A2A](https://a2a-protocol.org),
//! each A2UI message travels as an ordinary data part whose metadata carries
//! `mimeType: application/json+a2ui`. This crate provides that tagging
//! convention and the negotiation around it.
//!
//! ## Overview
//!
//! - **Tag and detect** A2UI parts: [`a2ui::create_a2ui_part`],
//!   [`a2ui::is_a2ui_part`], [`a2ui::get_a2ui_data_part`]
//! - **Advertise** A2UI on an agent card: [`a2ui::get_a2ui_agent_extension`],
//!   [`AgentCardBuilder::with_a2ui_extension`]
//! - **Negotiate** per request: [`a2ui::try_activate_a2ui_extension`],
//!   [`a2ui::ClientCapabilities`], [`a2ui::CatalogResolver`]
//! - **Generate** A2UI from an LLM: [`a2ui::SendA2uiToClientToolset`]
//! - **Request** A2UI as a client: [`a2ui::request_a2ui_extension`],
//!   [`a2ui::prepare_a2ui_message`]
//!
//! ## Quick Start: Agent
//!
//! ```
//! use a2ui_a2a::a2ui::{create_a2ui_part, try_activate_a2ui_extension, A2UI_EXTENSION_URI};
//! use a2ui_a2a::server::{RequestContext, ServerCallContext};
//! use a2ui_a2a::types::Message;
//! use a2ui_a2a::utils::new_agent_parts_message;
//! use serde_json::json;
//!
//! // The transport layer records the X-A2A-Extensions header.
//! let call = ServerCallContext::from_extension_headers(&[A2UI_EXTENSION_URI.to_string()]);
//! let mut ctx = RequestContext::new("task-1", "ctx-1", Message::user("m1", "find pizza"))
//!     .with_call_context(call);
//!
//! if try_activate_a2ui_extension(&mut ctx) {
//!     let ui = json!({"beginRendering": {"surfaceId": "results", "root": "root"}});
//!     let reply = new_agent_parts_message(
//!         vec![create_a2ui_part(ui.as_object().cloned().unwrap())],
//!         Some(ctx.context_id.clone()),
//!         Some(ctx.task_id.clone()),
//!     );
//!     assert_eq!(reply.parts.len(), 1);
//! }
//! assert!(ctx.activated_extensions().contains(A2UI_EXTENSION_URI));
//! ```
//!
//! ## Quick Start: Client
//!
//! ```
//! use a2ui_a2a::a2ui::{
//!     get_a2ui_data_part, prepare_a2ui_message, request_a2ui_extension, ClientCapabilities,
//!     STANDARD_CATALOG_ID,
//! };
//! use a2ui_a2a::types::Message;
//!
//! // Ask for the extension in the HTTP headers...
//! let http_kwargs = request_a2ui_extension(None);
//! assert!(http_kwargs["headers"].contains_key("X-A2A-Extensions"));
//!
//! // ...and say which catalogs can be rendered.
//! let mut message = Message::user("m1", "find pizza");
//! let caps = ClientCapabilities::with_catalog_ids([STANDARD_CATALOG_ID]);
//! prepare_a2ui_message(&mut message, Some(&caps));
//!
//! // Render the A2UI parts of the reply, ignore the rest.
//! let ui_parts: Vec<_> = message.parts.iter().filter_map(get_a2ui_data_part).collect();
//! assert!(ui_parts.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`a2ui`]: the extension itself
//! - [`types`]: the A2A protocol types A2UI payloads travel in
//! - [`server`]: request contexts and extension negotiation state
//! - [`utils`]: helpers for parts, messages and the extensions header
//! - [`builders`]: [`AgentCardBuilder`]
//! - [`error`]: [`A2uiError`] with JSON-RPC error codes
//!
//! The HTTP transport is out of scope; any A2A server or client can carry
//! these parts. See `demos/a2ui_round_trip.rs` for an end-to-end walk
//! through negotiation, tool validation and rendering.

pub mod a2ui;
pub mod builders;
pub mod error;
pub mod server;
pub mod types;
pub mod utils;

/// Convenience re-exports for common usage.
///
/// ```
/// use a2ui_a2a::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::types::{
        AgentCapabilities, AgentCard, AgentExtension, AgentSkill, DataPart, FileContent,
        FilePart, JsonObject, Message, Part, Role, SendMessageParams, TextPart,
    };

    // Errors
    pub use crate::error::{A2uiError, A2uiResult};

    // Builders
    pub use crate::builders::AgentCardBuilder;

    // A2UI
    pub use crate::a2ui::{
        create_a2ui_data_part, create_a2ui_part, get_a2ui_agent_extension, get_a2ui_data_part,
        is_a2ui_part, try_activate_a2ui_extension, CatalogResolver, ClientCapabilities,
        SendA2uiToClientToolset, A2UI_EXTENSION_URI, A2UI_MIME_TYPE, MIME_TYPE_KEY,
    };

    // Server
    pub use crate::server::{
        RequestContext, RequestContextBuilder, ServerCallContext, SimpleRequestContextBuilder,
    };
}

// Re-export core types at crate root for convenience.
pub use builders::AgentCardBuilder;
pub use error::{A2uiError, A2uiResult};
pub use types::*;
