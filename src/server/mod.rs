//! Server-side request context.
//!
//! - [`RequestContext`]: execution context with task IDs, message, metadata
//! - [`ServerCallContext`]: per-request context with extensions and state
//! - [`RequestContextBuilder`] trait + [`SimpleRequestContextBuilder`]: build contexts
//!
//! The HTTP layer is left to the host application: it reads the
//! `X-A2A-Extensions` header into a [`ServerCallContext`], and echoes back
//! whatever ends up in `activated_extensions`.

pub mod request_context;

pub use request_context::{
    RequestContext, RequestContextBuilder, ServerCallContext, SimpleRequestContextBuilder,
};
