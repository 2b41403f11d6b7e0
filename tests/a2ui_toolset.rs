//! Tests for the send_a2ui_json_to_client tool and tool event conversion.

use a2ui_a2a::a2ui::{
    convert_tool_event_to_parts, get_a2ui_data_part, is_a2ui_part, A2uiSchemaProvider,
    CatalogResolver, ClientCapabilities, FnEnabledProvider, FnSchemaProvider,
    SendA2uiJsonToClientTool, SendA2uiToClientToolset, ToolEvent, A2UI_EXTENSION_URI,
    STANDARD_CATALOG_ID,
};
use a2ui_a2a::error::{A2uiError, A2uiResult};
use a2ui_a2a::server::{RequestContext, ServerCallContext};
use a2ui_a2a::types::Message;
use async_trait::async_trait;
use serde_json::{json, Value};

fn schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "beginRendering": {"type": "object"},
            "surfaceUpdate": {"type": "object"},
            "dataModelUpdate": {"type": "object"},
            "deleteSurface": {"type": "object"}
        }
    })
}

fn context() -> RequestContext {
    RequestContext::new("task-1", "ctx-1", Message::user("m1", "show me"))
}

fn a2ui_context() -> RequestContext {
    context().with_call_context(ServerCallContext::from_extension_headers(&[
        A2UI_EXTENSION_URI.to_string(),
    ]))
}

fn tool() -> SendA2uiJsonToClientTool {
    SendA2uiJsonToClientTool::new(schema())
}

// Toolset

#[tokio::test]
async fn test_toolset_enabled() {
    let toolset = SendA2uiToClientToolset::new(true, schema());

    let tools = toolset.get_tools(Some(&context())).await;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name(), "send_a2ui_json_to_client");
}

#[tokio::test]
async fn test_toolset_disabled() {
    let toolset = SendA2uiToClientToolset::new(false, schema());
    assert!(toolset.get_tools(Some(&context())).await.is_empty());
}

#[tokio::test]
async fn test_toolset_without_context_is_disabled() {
    let toolset = SendA2uiToClientToolset::new(true, schema());
    assert!(toolset.get_tools(None).await.is_empty());
}

#[tokio::test]
async fn test_toolset_enabled_by_requested_extension() {
    let toolset = SendA2uiToClientToolset::new(
        FnEnabledProvider(|ctx: &RequestContext| ctx.is_extension_requested(A2UI_EXTENSION_URI)),
        schema(),
    );

    assert_eq!(toolset.get_tools(Some(&a2ui_context())).await.len(), 1);
    assert!(toolset.get_tools(Some(&context())).await.is_empty());
}

// Tool declaration and instructions

#[test]
fn test_tool_declaration() {
    let declaration = tool().declaration();

    assert_eq!(declaration["name"], "send_a2ui_json_to_client");
    assert_eq!(declaration["parameters"]["required"], json!(["a2ui_json"]));
    assert_eq!(
        declaration["parameters"]["properties"]["a2ui_json"]["type"],
        "string"
    );
    assert!(declaration["description"]
        .as_str()
        .unwrap()
        .contains("---BEGIN A2UI JSON SCHEMA---"));
}

#[tokio::test]
async fn test_instructions_embed_wrapped_schema() {
    let instructions = tool().instructions(&context()).await.unwrap();

    let body = instructions
        .strip_prefix("\n---BEGIN A2UI JSON SCHEMA---\n")
        .and_then(|rest| rest.strip_suffix("\n---END A2UI JSON SCHEMA---\n"))
        .expect("schema markers");
    let embedded: Value = serde_json::from_str(body).unwrap();
    assert_eq!(embedded, json!({"type": "array", "items": schema()}));
}

#[tokio::test]
async fn test_instructions_with_empty_schema() {
    let tool = SendA2uiJsonToClientTool::new(json!({}));
    assert_eq!(
        tool.instructions(&context()).await,
        Err(A2uiError::EmptySchema)
    );
}

// Tool run

#[tokio::test]
async fn test_run_validates_array() {
    let payload = json!([
        {"beginRendering": {"surfaceId": "s1", "root": "root"}},
        {"surfaceUpdate": {"surfaceId": "s1", "components": []}}
    ]);
    let args = json!({"a2ui_json": payload.to_string()});

    let result = tool().run(&args, &context()).await;

    assert_eq!(result, json!({"validated_a2ui_json": payload}));
}

#[tokio::test]
async fn test_run_wraps_single_object() {
    let message = json!({"deleteSurface": {"surfaceId": "s1"}});
    let args = json!({"a2ui_json": message.to_string()});

    let result = tool().run(&args, &context()).await;

    assert_eq!(result, json!({"validated_a2ui_json": [message]}));
}

#[tokio::test]
async fn test_run_missing_argument() {
    for args in [json!({}), json!({"a2ui_json": ""}), json!({"a2ui_json": 5})] {
        let result = tool().run(&args, &context()).await;
        assert_eq!(
            result,
            json!({
                "error": "Failed to call A2UI tool send_a2ui_json_to_client: missing required arg a2ui_json"
            })
        );
    }
}

#[tokio::test]
async fn test_run_invalid_json() {
    let args = json!({"a2ui_json": "[{\"beginRendering\": "});

    let result = tool().run(&args, &context()).await;

    let error = result["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to call A2UI tool send_a2ui_json_to_client: Invalid JSON"));
    assert!(result.get("validated_a2ui_json").is_none());
}

fn text_component_tool() -> SendA2uiJsonToClientTool {
    SendA2uiJsonToClientTool::new(json!({
        "type": "object",
        "properties": {
            "type": {"const": "Text"},
            "text": {"type": "string"}
        },
        "required": ["type", "text"]
    }))
}

#[tokio::test]
async fn test_run_accepts_schema_conforming_payload() {
    let args = json!({"a2ui_json": r#"[{"type": "Text", "text": "Hello"}]"#});

    let result = text_component_tool().run(&args, &context()).await;

    assert_eq!(
        result,
        json!({"validated_a2ui_json": [{"type": "Text", "text": "Hello"}]})
    );
}

#[tokio::test]
async fn test_run_missing_required_property() {
    let args = json!({"a2ui_json": r#"[{"type": "Text"}]"#});

    let result = text_component_tool().run(&args, &context()).await;

    let error = result["error"].as_str().unwrap();
    assert!(error.contains("Failed to call A2UI tool"));
    assert!(error.contains("\"text\" is a required property"));
    assert!(result.get("validated_a2ui_json").is_none());
}

#[tokio::test]
async fn test_run_type_mismatch() {
    let payload = json!([{"type": "Text", "text": "ok"}, {"type": "Button", "text": 5}]);
    let args = json!({"a2ui_json": payload.to_string()});

    let result = text_component_tool().run(&args, &context()).await;

    let error = result["error"].as_str().unwrap();
    assert!(error.contains("item 1"));
    assert!(error.contains("5 is not of type \"string\""));
    assert!(result.get("validated_a2ui_json").is_none());
}

// Schema providers

struct FailingSchema;

#[async_trait]
impl A2uiSchemaProvider for FailingSchema {
    async fn a2ui_schema(&self, _context: &RequestContext) -> A2uiResult<Value> {
        Err(A2uiError::Other("schema store offline".to_string()))
    }
}

#[tokio::test]
async fn test_run_reports_provider_failure() {
    let tool = SendA2uiJsonToClientTool::new(FailingSchema);
    let args = json!({"a2ui_json": r#"{"deleteSurface": {}}"#});

    let result = tool.run(&args, &context()).await;

    assert_eq!(
        result["error"],
        "Failed to call A2UI tool send_a2ui_json_to_client: schema store offline"
    );
}

#[tokio::test]
async fn test_schema_from_closure() {
    let tool = SendA2uiJsonToClientTool::new(FnSchemaProvider(|ctx: &RequestContext| {
        if ctx.task_id == "task-1" {
            Ok(schema())
        } else {
            Err(A2uiError::Other("unknown task".to_string()))
        }
    }));

    let wrapped = tool.get_a2ui_schema(&context()).await.unwrap();
    assert_eq!(wrapped["items"], schema());
}

#[tokio::test]
async fn test_schema_from_catalog_resolver() {
    let base = json!({
        "properties": {
            "surfaceUpdate": {"properties": {"components": {"items": {"properties": {
                "component": {"properties": {}}
            }}}}}
        }
    });
    let resolver = CatalogResolver::new(&base.to_string())
        .unwrap()
        .with_local_catalog(STANDARD_CATALOG_ID, r#"{"Text": {}}"#)
        .unwrap();
    let tool = SendA2uiJsonToClientTool::new(resolver);

    let mut message = Message::user("m1", "hi");
    ClientCapabilities::with_catalog_ids([STANDARD_CATALOG_ID]).attach_to_message(&mut message);
    let ctx = RequestContext::new("t1", "c1", message);

    let wrapped = tool.get_a2ui_schema(&ctx).await.unwrap();
    assert_eq!(
        wrapped["items"]["properties"]["surfaceUpdate"]["properties"]["components"]["items"]
            ["properties"]["component"]["properties"],
        json!({"Text": {}})
    );

    // Without capabilities the resolver has nothing to go on.
    let err = tool.get_a2ui_schema(&context()).await.unwrap_err();
    assert_eq!(err, A2uiError::MissingClientCapabilities);
}

// Tool events

#[test]
fn test_convert_successful_response() {
    let event = ToolEvent::Response {
        name: "send_a2ui_json_to_client".to_string(),
        response: json!({
            "validated_a2ui_json": [
                {"beginRendering": {"surfaceId": "s1", "root": "root"}},
                {"deleteSurface": {"surfaceId": "s0"}}
            ]
        }),
    };

    let parts = convert_tool_event_to_parts(&event).unwrap();

    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(is_a2ui_part));
    let first = get_a2ui_data_part(&parts[0]).unwrap();
    assert_eq!(
        Value::Object(first.data.clone()),
        json!({"beginRendering": {"surfaceId": "s1", "root": "root"}})
    );
}

#[test]
fn test_convert_swallows_call_and_errors() {
    let call = ToolEvent::Call {
        name: "send_a2ui_json_to_client".to_string(),
        args: json!({"a2ui_json": "[]"}),
    };
    assert_eq!(convert_tool_event_to_parts(&call), Some(Vec::new()));

    let failed = ToolEvent::Response {
        name: "send_a2ui_json_to_client".to_string(),
        response: json!({"error": "boom"}),
    };
    assert_eq!(convert_tool_event_to_parts(&failed), Some(Vec::new()));

    let empty = ToolEvent::Response {
        name: "send_a2ui_json_to_client".to_string(),
        response: json!({"validated_a2ui_json": []}),
    };
    assert_eq!(convert_tool_event_to_parts(&empty), Some(Vec::new()));
}

#[test]
fn test_convert_skips_non_object_messages() {
    let event = ToolEvent::Response {
        name: "send_a2ui_json_to_client".to_string(),
        response: json!({"validated_a2ui_json": [1, {"deleteSurface": {}}]}),
    };
    assert_eq!(convert_tool_event_to_parts(&event).map(|p| p.len()), Some(1));
}

#[test]
fn test_convert_ignores_other_tools() {
    let event = ToolEvent::Response {
        name: "get_weather".to_string(),
        response: json!({"validated_a2ui_json": [{"deleteSurface": {}}]}),
    };
    assert_eq!(convert_tool_event_to_parts(&event), None);

    let call = ToolEvent::Call {
        name: "get_weather".to_string(),
        args: json!({}),
    };
    assert_eq!(convert_tool_event_to_parts(&call), None);
}

#[tokio::test]
async fn test_tool_run_feeds_conversion() {
    let tool = tool();
    let args = json!({"a2ui_json": r#"{"deleteSurface": {"surfaceId": "s1"}}"#});

    let response = tool.run(&args, &a2ui_context()).await;
    let parts = convert_tool_event_to_parts(&ToolEvent::Response {
        name: tool.name().to_string(),
        response,
    })
    .unwrap();

    assert_eq!(parts.len(), 1);
    assert!(is_a2ui_part(&parts[0]));
}
