//! Tests for commands/api.rs request planning

use clap::Parser;
use nem_cli::client::{HttpMethod, RequestPlan};
use nem_cli::commands::api::ApiArgs;
use nem_cli::connection::{NetworkOpts, NodeEndpoint};

fn header<'a>(plan: &'a RequestPlan, name: &str) -> Option<&'a str> {
    plan.headers
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_api_args_parsing() {
    let args = ApiArgs::parse_from(["api", "--url", "/chain/height"]);
    assert_eq!(args.url.as_deref(), Some("/chain/height"));
    assert!(!args.post);
    assert!(args.json.is_none());
    assert!(args.params.is_none());

    let args = ApiArgs::parse_from([
        "api",
        "-u",
        "/block/at/public",
        "-P",
        "-j",
        r#"{"height": 1149971}"#,
    ]);
    assert_eq!(args.url.as_deref(), Some("/block/at/public"));
    assert!(args.post);
    assert_eq!(args.json.as_deref(), Some(r#"{"height": 1149971}"#));
}

#[test]
fn test_no_url_means_no_request() {
    assert!(RequestPlan::build(None, false, None, None).is_none());
    assert!(RequestPlan::build(Some(""), true, Some("{}"), None).is_none());
}

#[test]
fn test_default_method_is_get() {
    let plan = RequestPlan::build(Some("/chain/height"), false, None, None).unwrap();
    assert_eq!(plan.method, HttpMethod::Get);
    assert!(plan.headers.is_empty());
    assert!(plan.body.is_none());
}

#[test]
fn test_post_flag_selects_post() {
    let plan = RequestPlan::build(Some("/block/at/public"), true, None, None).unwrap();
    assert_eq!(plan.method, HttpMethod::Post);
}

#[test]
fn test_json_body_headers() {
    let body = r#"{"height": 1149971}"#;
    let plan = RequestPlan::build(Some("/block/at/public"), true, Some(body), None).unwrap();

    assert_eq!(header(&plan, "Content-Type"), Some("application/json"));
    assert_eq!(
        header(&plan, "Content-Length"),
        Some(body.len().to_string().as_str())
    );
    assert_eq!(plan.body.as_deref(), Some(body));
}

#[test]
fn test_params_body_headers() {
    let query = "address=TDWZ55R5VIHSH5WWK6CEGAIP7D35XVFZ3RU2S5UQ";
    let plan = RequestPlan::build(Some("/account/get"), true, None, Some(query)).unwrap();

    assert_eq!(
        header(&plan, "Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        header(&plan, "Content-Length"),
        Some(query.len().to_string().as_str())
    );
    assert_eq!(plan.body.as_deref(), Some(query));
}

#[test]
fn test_json_wins_over_params() {
    let plan = RequestPlan::build(Some("/x"), true, Some("{}"), Some("a=b")).unwrap();
    assert_eq!(header(&plan, "Content-Type"), Some("application/json"));
    assert_eq!(plan.body.as_deref(), Some("{}"));
}

#[test]
fn test_missing_leading_slash_is_normalized() {
    let plan = RequestPlan::build(Some("chain/height"), false, None, None).unwrap();
    assert_eq!(plan.path, "/chain/height");
}

#[test]
fn test_request_dump_shape() {
    let body = r#"{"height": 1}"#;
    let plan = RequestPlan::build(Some("/block/at/public"), true, Some(body), None).unwrap();
    let endpoint = NodeEndpoint::resolve(&NetworkOpts::default());
    let dump = plan.dump(&endpoint);

    let mut lines = dump.lines();
    assert_eq!(lines.next(), Some("POST /block/at/public HTTP/1.1"));
    assert!(dump.contains("User-Agent: nem-cli/"));
    assert!(dump.contains(&format!("Host: {}", endpoint.host)));
    assert!(dump.contains("Content-Type: application/json"));
    // blank line separates headers from the body
    assert!(dump.contains(&format!("\n\n{}", body)));
}
