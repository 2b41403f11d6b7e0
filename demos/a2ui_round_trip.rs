//! A2UI round trip: negotiation, tool validation and rendering in one process.
//!
//! Run with:
//! ```sh
//! cargo run --example a2ui_round_trip
//! ```
//!
//! The client and the agent exchange JSON exactly as they would over HTTP,
//! but without a transport: the request body and the `X-A2A-Extensions`
//! header are handed across directly. The LLM is replaced by a canned
//! tool call.

use a2ui_a2a::a2ui::{
    convert_tool_event_to_parts, get_a2ui_data_part, prepare_a2ui_message,
    request_a2ui_extension, try_activate_a2ui_extension, AgentA2uiSupport, CatalogResolver,
    ClientCapabilities, FnEnabledProvider, SendA2uiToClientToolset, ToolEvent,
    STANDARD_CATALOG_ID,
};
use a2ui_a2a::builders::AgentCardBuilder;
use a2ui_a2a::server::{
    RequestContext, RequestContextBuilder, ServerCallContext, SimpleRequestContextBuilder,
};
use a2ui_a2a::types::{AgentCard, Message, SendMessageParams};
use a2ui_a2a::utils::{get_message_text, new_agent_parts_message, HTTP_EXTENSION_HEADER};
use anyhow::{anyhow, Result};
use serde_json::json;

const A2UI_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "beginRendering": {"type": "object"},
    "surfaceUpdate": {
      "type": "object",
      "properties": {
        "surfaceId": {"type": "string"},
        "components": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "id": {"type": "string"},
              "component": {"type": "object", "properties": {}}
            }
          }
        }
      }
    },
    "dataModelUpdate": {"type": "object"},
    "deleteSurface": {"type": "object"}
  }
}"#;

const STANDARD_CATALOG: &str = r#"{
  "Text": {"type": "object"},
  "Column": {"type": "object"},
  "Button": {"type": "object"}
}"#;

fn agent_card() -> AgentCard {
    AgentCardBuilder::new(
        "Restaurant Agent",
        "Finds restaurants and shows them as cards",
        "0.1.0",
    )
    .with_url("http://localhost:10002")
    .with_skill(
        "find_restaurants",
        "Find Restaurants",
        "Finds restaurants by cuisine",
        vec!["restaurant".to_string()],
    )
    .with_a2ui_extension(false, &[STANDARD_CATALOG_ID])
    .build()
}

/// What the LLM would produce when asked to show results.
fn canned_tool_call() -> ToolEvent {
    let ui = json!([
        {"beginRendering": {"surfaceId": "results", "root": "root"}},
        {"surfaceUpdate": {"surfaceId": "results", "components": [
            {"id": "root", "component": {"Column": {"children": {"explicitList": ["title"]}}}},
            {"id": "title", "component": {"Text": {"text": {"literalString": "Top 3 Szechuan"}}}}
        ]}}
    ]);
    ToolEvent::Call {
        name: "send_a2ui_json_to_client".to_string(),
        args: json!({ "a2ui_json": ui.to_string() }),
    }
}

async fn handle_request(
    body: &str,
    extension_header: &str,
    resolver: CatalogResolver,
) -> Result<Message> {
    let params: SendMessageParams = serde_json::from_str(body)?;
    let call = ServerCallContext::from_extension_headers(&[extension_header.to_string()]);
    let mut ctx: RequestContext = SimpleRequestContextBuilder
        .build(Some(&params), None, None, Some(call))
        .await?;

    let use_ui = try_activate_a2ui_extension(&mut ctx);
    tracing::info!(use_ui, input = %ctx.get_user_input(" "), "agent received request");

    let toolset = SendA2uiToClientToolset::new(
        FnEnabledProvider(move |_: &RequestContext| use_ui),
        resolver,
    );
    let tools = toolset.get_tools(Some(&ctx)).await;
    let Some(tool) = tools.first() else {
        return Ok(new_agent_parts_message(
            vec![a2ui_a2a::Part::text("Here are some restaurants (text only).")],
            Some(ctx.context_id.clone()),
            Some(ctx.task_id.clone()),
        ));
    };

    let instructions = tool.instructions(&ctx).await?;
    tracing::info!(len = instructions.len(), "built LLM instructions");

    // The LLM calls the tool; the call itself is not shown to the client.
    let call = canned_tool_call();
    let mut parts = convert_tool_event_to_parts(&call).unwrap_or_default();

    let ToolEvent::Call { name, args } = call else {
        return Err(anyhow!("expected a tool call"));
    };
    let response = tool.run(&args, &ctx).await;
    parts.extend(
        convert_tool_event_to_parts(&ToolEvent::Response { name, response }).unwrap_or_default(),
    );

    Ok(new_agent_parts_message(
        parts,
        Some(ctx.context_id.clone()),
        Some(ctx.task_id.clone()),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for log output.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Client: discover what the agent can render.
    let card = agent_card();
    println!("Agent card:\n{}\n", serde_json::to_string_pretty(&card)?);
    let support = AgentA2uiSupport::from_card(&card)
        .ok_or_else(|| anyhow!("agent does not speak A2UI"))?;

    // Client: request the extension and describe its own catalogs.
    let http_kwargs = request_a2ui_extension(None);
    let header = http_kwargs["headers"][HTTP_EXTENSION_HEADER].clone();
    let mut message = Message::user("m-1", "Top Szechuan restaurants near me");
    let caps = ClientCapabilities::with_catalog_ids(support.supported_catalog_ids);
    prepare_a2ui_message(&mut message, Some(&caps));
    let body = serde_json::to_string(&SendMessageParams {
        message,
        configuration: None,
        metadata: None,
    })?;

    // Agent: negotiate, run the tool, reply.
    let resolver = CatalogResolver::new(A2UI_SCHEMA)?
        .with_local_catalog(STANDARD_CATALOG_ID, STANDARD_CATALOG)?;
    let reply = handle_request(&body, &header, resolver).await?;
    let wire = serde_json::to_string_pretty(&reply)?;
    println!("Agent reply:\n{}\n", wire);

    // Client: render A2UI parts, show the rest as text.
    let reply: Message = serde_json::from_str(&wire)?;
    for ui in reply.parts.iter().filter_map(get_a2ui_data_part) {
        println!("render: {}", serde_json::to_string(&ui.data)?);
    }
    let text = get_message_text(&reply, "\n");
    if !text.is_empty() {
        println!("text: {}", text);
    }

    Ok(())
}
