//! Golden snapshots of rendered tool output for the reference data set.

use std::fs;
use std::path::PathBuf;

use company_docs_server::config::ServerConfig;
use company_docs_server::handlers::{self, ServerContext};
use company_docs_server::knowledge::search::SearchOptions;
use company_docs_server::knowledge::KnowledgeBase;
use company_docs_server::protocol::{JsonRpcRequest, RpcId};
use serde_json::json;

fn expected_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name)
}

fn read_expected(name: &str) -> String {
    fs::read_to_string(expected_path(name))
        .expect("expected file missing")
        .trim_end()
        .to_string()
}

fn reference() -> KnowledgeBase {
    KnowledgeBase::reference(SearchOptions::default()).unwrap()
}

fn assert_golden(actual: &str, name: &str) {
    assert_eq!(actual.trim_end(), read_expected(name), "{name} does not match golden");
}

#[test]
fn golden_adr_record() {
    assert_golden(&reference().get_record("adr-004"), "adr_004.md");
}

#[test]
fn golden_adr_list() {
    assert_golden(&reference().list_records(), "adr_list.md");
}

#[test]
fn golden_service_info() {
    let kb = reference();
    assert_golden(&kb.get_service("user-service"), "service_user.md");
    assert_golden(&kb.get_service("User Service"), "service_user.md");
}

#[test]
fn golden_search_single_document() {
    assert_golden(&reference().search("JWT"), "search_jwt.md");
}

#[test]
fn golden_search_keeps_trailing_context_exactly() {
    let actual = reference().search("JWT");
    let expected = fs::read_to_string(expected_path("search_jwt.md")).expect("expected file missing");
    assert_eq!(actual, expected);
    assert!(actual.ends_with("- Refresh token rotation enabled\n"));
}

#[test]
fn golden_search_truncates_to_three_windows() {
    assert_golden(&reference().search("service"), "search_service.md");
}

#[test]
fn golden_search_miss() {
    assert_golden(&reference().search("Kafka Streams"), "search_miss.md");
}

#[test]
fn golden_naming_failure() {
    assert_golden(
        &reference().check_naming_convention("maxRetries", "constant"),
        "naming_constant_fail.md",
    );
}

#[test]
fn golden_search_through_tools_call() {
    let ctx = ServerContext::new(ServerConfig::default()).unwrap();
    let req = JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Str("golden".into())),
        method: "tools/call".into(),
        params: Some(json!({
            "name": "search_docs",
            "arguments": { "query": "service" }
        })),
    };

    let response = handlers::dispatch(&req, &ctx).unwrap();
    let result = response.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert_golden(text, "search_service.md");
}
