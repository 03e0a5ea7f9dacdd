//! Webhook integration tests
//!
//! Each test starts a fake Slack API and the real server on ephemeral
//! ports; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, slack_files, test_config, FakeSlack, SlashCommand, TestServer, FEB_1, JAN_1,
    TOKEN,
};
use reqwest::StatusCode;
use serde_json::Value;
use sweep_service::ChatReply;

const COMMANDS: &str = "/slack/commands";

async fn setup() -> (FakeSlack, TestServer) {
    let slack = FakeSlack::start().await.expect("Failed to start fake Slack");
    let server = TestServer::start(&slack).await.expect("Failed to start server");
    (slack, server)
}

async fn send(server: &TestServer, text: &str) -> ChatReply {
    let response = server
        .post_form(COMMANDS, &SlashCommand::new(text))
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (_slack, server) = setup().await;

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "slack-file-sweeper");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let (_slack, server) = setup().await;

    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Command Tests
// ============================================================================

#[tokio::test]
async fn test_help_reply() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(2));

    let reply = send(&server, "2020/01/01 2020/02/01 --help").await;

    assert!(reply.text.starts_with("```"));
    assert!(reply.text.contains("--all-channels"));
    assert_eq!(reply.username, "ファイル削除bot");
    assert_eq!(reply.icon_emoji, ":yami:");
    assert!(reply.link_names);
    assert!(slack.list_queries().is_empty());
}

#[tokio::test]
async fn test_inverted_range_reply() {
    let (slack, server) = setup().await;

    let reply = send(&server, "2020/02/01 2020/01/01").await;

    assert_eq!(reply.text, "開始日時が終了日時より後になっています");
    assert!(slack.list_queries().is_empty());
}

#[tokio::test]
async fn test_missing_end_reply() {
    let (slack, server) = setup().await;

    let reply = send(&server, "2020/01/01").await;

    assert!(reply.text.contains("終了日時"));
    assert!(slack.list_queries().is_empty());
}

#[tokio::test]
async fn test_lookup_query_defaults_to_invoker() {
    let (slack, server) = setup().await;

    send(&server, "2020/01/01 2020/02/01").await;

    let queries = slack.list_queries();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query["token"], TOKEN);
    assert_eq!(query["ts_from"], JAN_1.to_string());
    assert_eq!(query["ts_to"], FEB_1.to_string());
    assert_eq!(query["channel"], "C1");
    assert_eq!(query["user"], "U1");
}

#[tokio::test]
async fn test_scope_flags_drop_filters() {
    let (slack, server) = setup().await;

    send(&server, "-ac 2020/01/01\u{3000}2020/02/01 -au").await;

    let queries = slack.list_queries();
    assert_eq!(queries.len(), 1);
    assert!(!queries[0].contains_key("channel"));
    assert!(!queries[0].contains_key("user"));
    assert_eq!(queries[0]["ts_from"], JAN_1.to_string());
}

#[tokio::test]
async fn test_nothing_to_delete() {
    let (slack, server) = setup().await;

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert_eq!(reply.text, "削除対象のファイルが0件です");
    assert!(slack.delete_calls().is_empty());
}

#[tokio::test]
async fn test_all_files_deleted() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(3));

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert_eq!(reply.text, "3ファイルを削除しました。");
    assert_eq!(slack.deleted_ids(), vec!["F1", "F2", "F3"]);

    let expected_auth = format!("Bearer {TOKEN}");
    assert!(slack
        .delete_calls()
        .iter()
        .all(|call| call.authorization.as_deref() == Some(expected_auth.as_str())));
}

#[tokio::test]
async fn test_partial_failure_stops() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(3));
    slack.fail_delete("F2");

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert_eq!(
        reply.text,
        "1ファイルを削除しました。Error: Deleting file2.png is failed (cant_delete_file)"
    );
    assert_eq!(slack.deleted_ids(), vec!["F1", "F2"]);
}

#[tokio::test]
async fn test_delete_http_error_stops() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(3));
    slack.fail_delete_status("F2", StatusCode::INTERNAL_SERVER_ERROR);

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert_eq!(
        reply.text,
        "1ファイルを削除しました。Error: Deleting file2.png is failed (http_500)"
    );
    // F3 is never sent upstream
    assert_eq!(slack.deleted_ids(), vec!["F1", "F2"]);
}

#[tokio::test]
async fn test_remaining_files_hint() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(2));
    slack.set_total(7);

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert!(reply.text.starts_with("2ファイルを削除しました。"));
    assert!(reply.text.contains("残り5件"));
}

#[tokio::test]
async fn test_lookup_failure_replies_generically() {
    let (slack, server) = setup().await;
    slack.set_files(slack_files(1));
    slack.fail_list("invalid_auth");

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert!(reply.text.contains("ファイル一覧を取得できませんでした"));
    assert!(slack.delete_calls().is_empty());
}

#[tokio::test]
async fn test_lookup_http_error_replies_generically() {
    let (slack, server) = setup().await;
    slack.fail_list_status(StatusCode::INTERNAL_SERVER_ERROR);

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert!(reply.text.contains("ファイル一覧を取得できませんでした"));
}

#[tokio::test]
async fn test_english_replies() {
    let slack = FakeSlack::start().await.unwrap();
    let config = test_config(&slack, &[("REPLY_LOCALE", "en"), ("REPLY_USERNAME", "sweeper")])
        .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    slack.set_files(slack_files(3));

    let reply = send(&server, "2020/01/01 2020/02/01").await;

    assert_eq!(reply.text, "Deleted 3 file(s).");
    assert_eq!(reply.username, "sweeper");
}

#[tokio::test]
async fn test_configured_time_zone() {
    let slack = FakeSlack::start().await.unwrap();
    let config = test_config(&slack, &[("COMMAND_UTC_OFFSET_MINUTES", "540")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    send(&server, "2020/01/01 2020/02/01").await;

    let queries = slack.list_queries();
    assert_eq!(queries[0]["ts_from"], (JAN_1 - 9 * 3600).to_string());
}

// ============================================================================
// Malformed Request Tests
// ============================================================================

#[tokio::test]
async fn test_missing_channel_is_bad_request() {
    let (slack, server) = setup().await;

    let response = server
        .post_form(COMMANDS, &SlashCommand::new("2020/01/01 2020/02/01").without_channel())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"].get("channel_id").is_some());
    assert!(slack.list_queries().is_empty());
}

#[tokio::test]
async fn test_json_body_is_rejected() {
    let (_slack, server) = setup().await;

    let response = server
        .client
        .post(format!("{}{COMMANDS}", server.base_url()))
        .json(&SlashCommand::new("-h"))
        .send()
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body["error"]["code"], "INVALID_FORM");
}
