//! The A2UI extension for A2A.
//!
//! A2UI (agent-to-user interface) lets an agent describe UI as JSON that
//! the client renders. Over A2A, each A2UI message rides in a data part
//! tagged with the `application/json+a2ui` MIME type.
//!
//! - [`extension`]: tagging and detection of A2UI parts, the extension's
//!   agent-card entry, per-request activation
//! - [`capabilities`]: client catalog capabilities and agent catalog support
//! - [`catalog`]: choosing a component catalog and building the schema
//! - [`schema`]: schema wrapping, payload checks, catalog injection
//! - [`toolset`]: the `send_a2ui_json_to_client` LLM tool
//! - [`converter`]: A2UI parts through text-only channels
//! - [`client`]: requesting the extension from an agent

pub mod capabilities;
pub mod catalog;
pub mod client;
pub mod converter;
pub mod extension;
pub mod schema;
pub mod toolset;

pub use capabilities::{AgentA2uiSupport, ClientCapabilities};
pub use catalog::{CatalogResolver, ResolvedCatalog};
pub use client::{prepare_a2ui_message, request_a2ui_extension};
pub use converter::{a2ui_part_to_text_part, text_part_to_a2ui_part};
pub use extension::*;
pub use schema::{inject_catalog, validate_messages, wrap_as_json_array};
pub use toolset::{
    convert_tool_event_to_parts, A2uiEnabledProvider, A2uiSchemaProvider, FnEnabledProvider,
    FnSchemaProvider, SendA2uiJsonToClientTool, SendA2uiToClientToolset, ToolEvent,
};
