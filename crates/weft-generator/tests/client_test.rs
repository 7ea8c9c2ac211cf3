//! Generator client tests against a mock HTTP endpoint.

use mockito::{Matcher, mock};
use serde_json::json;
use weft_config::kinds;
use weft_generator::{GeneratorClient, GeneratorConfig, GeneratorError};

fn client_for(path: &str) -> GeneratorClient {
  let endpoint = format!("{}{}", mockito::server_url(), path);
  GeneratorClient::new(GeneratorConfig::new(&endpoint).unwrap()).unwrap()
}

fn calculator_body() -> String {
  json!({
    "workflow": {
      "nodes": [
        { "id": "1", "type": "inputNode", "position": { "x": 50, "y": 50 }, "data": { "label": "A", "value": 10 } },
        { "id": "2", "type": "inputNode", "position": { "x": 50, "y": 200 }, "data": { "label": "B", "value": 5 } },
        { "id": "3", "type": "mathNode", "position": { "x": 300, "y": 100 }, "data": { "label": "Add", "operation": "add" } },
        { "id": "4", "type": "outputNode", "position": { "x": 550, "y": 100 }, "data": { "label": "Result" } }
      ],
      "edges": [
        { "id": "e1-3", "source": "1", "target": "3", "targetHandle": "inputA", "animated": true },
        { "id": "e2-3", "source": "2", "target": "3", "targetHandle": "inputB", "animated": true },
        { "id": "e3-4", "source": "3", "target": "4", "animated": true }
      ],
      "metadata": {
        "description": "Adds two numbers",
        "created": "2024-05-01T12:00:00Z",
        "nodeCount": 4,
        "edgeCount": 3
      }
    }
  })
  .to_string()
}

#[tokio::test]
async fn test_generate_calculator() {
  let _m = mock("POST", "/gen/calculator")
    .match_header("content-type", "application/json")
    .match_body(Matcher::Json(json!({ "prompt": "add 10 and 5" })))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(calculator_body())
    .create();

  let workflow = client_for("/gen/calculator")
    .generate("add 10 and 5")
    .await
    .unwrap();

  _m.assert();

  assert_eq!(workflow.nodes.len(), 4);
  assert_eq!(workflow.metadata.description, "Adds two numbers");

  let allowed = [kinds::INPUT, kinds::MATH, kinds::OUTPUT];
  let graph = workflow.into_graph(&allowed).unwrap();
  assert_eq!(graph.get_node("3").unwrap().kind, kinds::MATH);
  assert_eq!(graph.edges[0].input_slot(), "inputA");
}

#[tokio::test]
async fn test_proposal_with_unregistered_kind_is_rejected() {
  let _m = mock("POST", "/gen/restricted")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(calculator_body())
    .create();

  let workflow = client_for("/gen/restricted")
    .generate("add 10 and 5")
    .await
    .unwrap();

  let err = workflow
    .into_graph(&[kinds::INPUT, kinds::OUTPUT])
    .unwrap_err();
  assert!(matches!(
    err,
    GeneratorError::UnsupportedKind { ref kind, .. } if kind == kinds::MATH
  ));
}

#[tokio::test]
async fn test_error_status_carries_service_message() {
  let _m = mock("POST", "/gen/failing")
    .with_status(500)
    .with_header("content-type", "application/json")
    .with_body(r#"{"error":"Failed to generate workflow"}"#)
    .create();

  let err = client_for("/gen/failing")
    .generate("anything")
    .await
    .unwrap_err();

  _m.assert();

  assert!(matches!(err, GeneratorError::Status { status: 500, .. }));
  assert_eq!(
    err.to_string(),
    "generator returned 500: Failed to generate workflow"
  );
}

#[tokio::test]
async fn test_error_status_without_body() {
  let _m = mock("POST", "/gen/bare").with_status(400).create();

  let err = client_for("/gen/bare").generate("anything").await.unwrap_err();
  assert_eq!(err.to_string(), "generator returned 400: Bad Request");
}

#[tokio::test]
async fn test_malformed_body() {
  let _m = mock("POST", "/gen/garbled")
    .with_status(200)
    .with_body(r#"{"workflow": {"nodes": "nope"}}"#)
    .create();

  let err = client_for("/gen/garbled")
    .generate("anything")
    .await
    .unwrap_err();
  assert!(matches!(err, GeneratorError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_blank_prompt_sends_nothing() {
  let _m = mock("POST", "/gen/blank").expect(0).create();

  let err = client_for("/gen/blank").generate("").await.unwrap_err();

  _m.assert();
  assert!(matches!(err, GeneratorError::EmptyPrompt));
}
