//! Tests for the free-text webhook adapter against a mock endpoint.

use rcore::WebhookConfig;
use remora_n8n::JobQueryTool;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> WebhookConfig {
    WebhookConfig::new().endpoint_url(format!("{}/webhook/query", server.uri()))
}

#[tokio::test]
async fn upstream_body_is_relayed_verbatim() {
    let server = MockServer::start().await;
    let upstream = json!({"jobs": [1, 2, 3]});
    Mock::given(method("POST"))
        .and(path("/webhook/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    let output = tool.invoke("rust jobs in Berlin").await.unwrap();

    assert_eq!(output, serde_json::to_string_pretty(&upstream).unwrap());
    // No envelope: the upstream shape comes back without a success flag.
    let value: Value = serde_json::from_str(&output).unwrap();
    assert!(value.get("success").is_none());
}

#[tokio::test]
async fn body_is_the_bare_query_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "remote rust jobs"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    tool.invoke("remote rust jobs").await.unwrap();
}

#[tokio::test]
async fn empty_query_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    let err = tool.invoke("   ").await.unwrap_err();
    assert!(err.to_string().contains("non-empty"));

    server.verify().await;
}

#[tokio::test]
async fn invoke_json_validates_the_query_field() {
    let server = MockServer::start().await;
    let tool = JobQueryTool::new(config(&server)).unwrap();

    let err = tool.invoke_json(r#"{"query": 7}"#).await.unwrap_err();
    assert!(err.to_string().contains("query: expected a string"));

    let err = tool.invoke_json(r#"{}"#).await.unwrap_err();
    assert!(err.to_string().contains("query: required"));
}

#[tokio::test]
async fn invoke_json_forwards_valid_queries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "data roles"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    let output = tool.invoke_json(r#"{"query": "data roles"}"#).await.unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["count"], 4);
}

#[tokio::test]
async fn upstream_error_uses_the_failure_taxonomy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    let output = tool.invoke("anything").await.unwrap();
    let envelope: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["status"], 502);
    assert_eq!(envelope["statusText"], "Bad Gateway");
    assert_eq!(envelope["response"], "bad gateway");
}

#[tokio::test]
async fn non_json_upstream_body_is_returned_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain answer"))
        .mount(&server)
        .await;

    let tool = JobQueryTool::new(config(&server)).unwrap();
    assert_eq!(tool.invoke("anything").await.unwrap(), "plain answer");
}

#[tokio::test]
async fn handler_reports_validation_errors_in_band() {
    let server = MockServer::start().await;
    let tool = JobQueryTool::new(config(&server)).unwrap();
    let handler = tool.into_handler();

    let output = handler(r#"{}"#.to_owned()).await;
    assert!(output.contains("validation:"));
    assert!(output.contains("query: required"));
}

#[test]
fn tool_schema_requires_the_query_field() {
    let tool = JobQueryTool::tool();
    assert_eq!(tool.name, "job_search_query");

    let schema = serde_json::to_value(&tool.parameters).unwrap();
    assert!(schema["properties"].as_object().unwrap().contains_key("query"));
}
