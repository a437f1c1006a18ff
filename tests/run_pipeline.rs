//! End-to-end tests for a lexicalization run
//!
//! Inputs are written to a temp directory and the backend is replaced by a
//! recording stub, so no network access is needed.

use std::fs;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tablex::{run, run_with_client, BackendConfig, ConfigError, Fragment, RunPaths};
use tablex_agentic::{ChatCompletion, ChatRequest, LlmClient, LlmError};
use tablex_core::{TableSelector, WidePolicy};
use tempfile::TempDir;

/// Backend stub that records every request and replays a canned outcome
struct StubBackend {
    reply: Result<Value, u16>,
    requests: Mutex<Vec<Value>>,
}

impl StubBackend {
    fn answering(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|body| body["messages"][0]["content"][0]["text"].as_str().unwrap().to_string())
            .collect()
    }
}

#[async_trait]
impl LlmClient for StubBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        match &self.reply {
            Ok(body) => Ok(serde_json::from_value(body.clone())?),
            Err(status) => Err(LlmError::Status {
                status: *status,
                body: "backend unavailable".to_string(),
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "stub"
    }
}

fn cities_document() -> Value {
    json!({
        "data": {
            "datasetName": "geo",
            "tableName": "capitals",
            "header": ["city", "country", "population"],
            "rows": [
                {"idRow": 0, "data": ["Paris", "France", "2100000"]},
                {"idRow": 1, "data": ["Rome", "Italy", "2800000"]}
            ],
            "semanticAnnotations": {
                "cea": [
                    {"idRow": 0, "idColumn": 0, "entities": [{"id": "Q90", "name": "Paris (city)"}]},
                    {"idRow": 1, "idColumn": 1, "entities": []}
                ],
                "cta": [
                    {"idColumn": 0, "types": [{"id": "Q515", "name": "city"}]},
                    {"idColumn": 2, "types": [{"id": "Q1613416", "name": "population"}]}
                ],
                "cpa": [
                    {"idSourceColumn": 0, "idTargetColumn": 1, "predicates": [{"id": "P17", "name": "country"}]}
                ]
            },
            "metadata": {"column": [{"idColumn": 0}, {"idColumn": 1}, {"idColumn": 2}]},
            "status": "DONE"
        }
    })
}

fn workspace(table: &Value, params: &Value) -> (TempDir, RunPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = RunPaths::in_dir(dir.path());
    fs::write(&paths.table, serde_json::to_vec(table).unwrap()).unwrap();
    fs::write(&paths.params, serde_json::to_vec(params).unwrap()).unwrap();
    (dir, paths)
}

fn reply(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

#[tokio::test]
async fn test_success_fragment_and_prompt() {
    let (_dir, paths) = workspace(&cities_document(), &json!({}));
    let backend = StubBackend::answering(reply("Paris is the capital of France."));

    let fragment = run_with_client(&backend, &paths, TableSelector::default())
        .await
        .unwrap();
    assert_eq!(fragment, Fragment::success("Paris is the capital of France."));

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(
        "### Input:\n<city Paris (city), country,  France>;<city Rome, country,  Italy>;\n\n### Response:\n"
    ));
}

#[tokio::test]
async fn test_interest_widens_selection() {
    let (_dir, paths) = workspace(&cities_document(), &json!({"background": 0, "interest": 1}));
    let backend = StubBackend::answering(reply("ok"));

    run_with_client(&backend, &paths, TableSelector::default())
        .await
        .unwrap();

    let prompt = &backend.prompts()[0];
    assert!(prompt.contains(
        "<city Paris (city), country,  France>;\
         <city Paris (city), [UNKNOWN], population 2100000>;\
         < France, [UNKNOWN], population 2100000>;"
    ));
    assert_eq!(prompt.matches(">;").count(), 6);
}

#[tokio::test]
async fn test_missing_choices_render_placeholder() {
    let (_dir, paths) = workspace(&cities_document(), &json!({}));
    let backend = StubBackend::answering(json!({"id": "empty"}));

    let fragment = run_with_client(&backend, &paths, TableSelector::default())
        .await
        .unwrap();
    assert!(fragment.as_str().contains("Error on generating response"));
}

#[tokio::test]
async fn test_backend_failure_renders_error_fragment() {
    let (_dir, paths) = workspace(&cities_document(), &json!({}));
    let backend = StubBackend::failing(503);

    let fragment = run_with_client(&backend, &paths, TableSelector::default())
        .await
        .unwrap_err();
    assert_eq!(fragment, Fragment::error());
}

#[tokio::test]
async fn test_missing_configuration_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let paths = RunPaths::in_dir(dir.path());

    let fragment = run(
        Err(ConfigError::MissingVariable("GPT_KEY")),
        &paths,
        TableSelector::default(),
    )
    .await
    .unwrap_err();
    assert_eq!(fragment, Fragment::error());
}

#[tokio::test]
async fn test_unreachable_backend_renders_error_fragment() {
    let (_dir, paths) = workspace(&cities_document(), &json!({}));
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/chat", listener.local_addr().unwrap());
    drop(listener);

    let config = BackendConfig::from_lookup(|name| match name {
        "GPT_KEY" => Some("key".to_string()),
        "GPT_ENDPOINT" => Some(endpoint.clone()),
        _ => None,
    })
    .unwrap();

    let fragment = run(Ok(config), &paths, TableSelector::default())
        .await
        .unwrap_err();
    assert_eq!(fragment, Fragment::error());
}

#[tokio::test]
async fn test_bad_inputs_render_error_fragment() {
    let backend = StubBackend::answering(reply("unused"));

    let (_dir, paths) = workspace(&cities_document(), &json!({"background": 2}));
    let fragment = run_with_client(&backend, &paths, TableSelector::default()).await;
    assert_eq!(fragment, Err(Fragment::error()));

    let dir = tempfile::tempdir().unwrap();
    let paths = RunPaths::in_dir(dir.path());
    let fragment = run_with_client(&backend, &paths, TableSelector::default()).await;
    assert_eq!(fragment, Err(Fragment::error()));

    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn test_anchored_tail_policy() {
    let header: Vec<String> = (0..8).map(|c| format!("c{}", c)).collect();
    let table = json!({
        "data": {
            "datasetName": "wide",
            "tableName": "wide",
            "header": header,
            "rows": [{"idRow": 0, "data": ["a", "b", "c", "d", "e", "f", "g", "h"]}],
            "semanticAnnotations": {
                "cea": [],
                "cta": [{"idColumn": 7, "types": [{"id": "T", "name": "last"}]}],
                "cpa": []
            },
            "metadata": {"column": [{}, {}, {}, {}, {}, {}, {}, {}]},
            "status": "DONE"
        }
    });
    let (_dir, paths) = workspace(&table, &json!({"background": 1, "interest": 1}));
    let backend = StubBackend::answering(reply("ok"));

    run_with_client(&backend, &paths, TableSelector::new(WidePolicy::AnchoredTail))
        .await
        .unwrap();

    let prompt = &backend.prompts()[0];
    assert!(prompt.contains(
        "### Input:\n< a, [UNKNOWN],  f>;< a, [UNKNOWN],  g>;< a, [UNKNOWN], last h>;\
         < f, [UNKNOWN],  g>;< f, [UNKNOWN], last h>;< g, [UNKNOWN], last h>;\n"
    ));
}
