//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (the stats store may share it)
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, assert_text, audit_count, check_test_env, insert_infraction,
    insert_user, HistoryEntry, InfractionTable, SeededGuild, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn setup() -> Option<(TestServer, SeededGuild)> {
    if !check_test_env().await {
        return None;
    }
    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = SeededGuild::create(&server.pool)
        .await
        .expect("Failed to seed guild");
    Some((server, seeded))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let ready: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready["status"], "ready");
}

// ============================================================================
// Access Tests
// ============================================================================

#[tokio::test]
async fn test_outsider_sees_invalid_guild() {
    let Some((server, guild)) = setup().await else { return };
    let token = server.session(guild.outsider).unwrap();

    let response = server
        .get_auth(&format!("/guilds/{}", guild.guild_id), &token)
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body, "Invalid Guild");
}

#[tokio::test]
async fn test_platform_admin_opens_any_guild() {
    let Some((server, guild)) = setup().await else { return };
    let token = server.session(guild.platform_admin).unwrap();

    let response = server
        .get_auth(&format!("/guilds/{}/config", guild.guild_id), &token)
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("data-role=\"admin\""));

    let response = server.get_auth("/api/users/@me/guilds", &token).await.unwrap();
    let guilds: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(guilds
        .iter()
        .any(|g| g["guild"]["id"] == guild.guild_id.to_string()));
}

#[tokio::test]
async fn test_requests_without_session_are_rejected() {
    let Some((server, guild)) = setup().await else { return };

    let response = server.get(&guild.api("/config/raw")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Config Tests
// ============================================================================

#[tokio::test]
async fn test_editor_update_scenario() {
    let Some((server, guild)) = setup().await else { return };
    let token = server.session(guild.editor).unwrap();

    // Same permission map in a different order, different nickname
    let yaml = format!("{}nickname: boaty\n", guild.web_yaml());
    let response = server.post_config(guild.guild_id, &token, &yaml).await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(body.is_empty());
    assert_eq!(audit_count(&server.pool, guild.guild_id).await.unwrap(), 1);

    // Granting someone admin is not an editor's call
    let escalated = format!("{}  6: admin\n", guild.web_yaml());
    let response = server
        .post_config(guild.guild_id, &token, &escalated)
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body, "Cannot Alter Permissions");
    assert_eq!(audit_count(&server.pool, guild.guild_id).await.unwrap(), 1);

    let response = server
        .get_auth(&guild.api("/config/raw"), &token)
        .await
        .unwrap();
    assert_eq!(assert_text(response, StatusCode::OK).await.unwrap(), yaml);
}

#[tokio::test]
async fn test_viewer_and_bad_yaml_rejected() {
    let Some((server, guild)) = setup().await else { return };

    let viewer = server.session(guild.viewer).unwrap();
    let response = server
        .post_config(guild.guild_id, &viewer, "nickname: x\n")
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body, "Missing Permissions");

    let admin = server.session(guild.platform_admin).unwrap();
    let response = server
        .post_config(guild.guild_id, &admin, "web: [unclosed")
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, "Invalid YAML");

    assert_eq!(audit_count(&server.pool, guild.guild_id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_config_history_newest_first() {
    let Some((server, guild)) = setup().await else { return };
    let admin = server.session(guild.platform_admin).unwrap();

    for n in 0..3 {
        let yaml = format!("{}n: {n}\n", guild.web_yaml());
        let response = server.post_config(guild.guild_id, &admin, &yaml).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let viewer = server.session(guild.viewer).unwrap();
    let response = server
        .get_auth(&guild.api("/config/history"), &viewer)
        .await
        .unwrap();
    let history: Vec<HistoryEntry> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(history.len(), 3);
    assert!(history[0].after.ends_with("n: 2\n"));
    assert_eq!(history[0].before, history[1].after);
    assert_eq!(history[0].user["user_id"], guild.platform_admin.to_string());
    assert!(!history[0].created_at.is_empty());

    let response = server
        .get_auth(&guild.api("/config/history?page=2"), &viewer)
        .await
        .unwrap();
    let page_two: Vec<HistoryEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page_two.is_empty());
}

// ============================================================================
// Infraction Tests
// ============================================================================

#[tokio::test]
async fn test_infraction_search_scenario() {
    let Some((server, guild)) = setup().await else { return };
    let target = insert_user(&server.pool, "target", false).await.unwrap();

    for n in 0..50 {
        let reason = if n % 5 == 0 {
            format!("jonah spammed #{n}")
        } else {
            format!("spam #{n}")
        };
        insert_infraction(&server.pool, guild.guild_id, target, guild.editor, &reason)
            .await
            .unwrap();
    }

    let token = server.session(guild.viewer).unwrap();
    let response = server
        .get_query(
            &guild.api("/infractions"),
            &token,
            &[
                ("draw", "4"),
                ("start", "0"),
                ("length", "25"),
                ("search[value]", "jon"),
                ("order[0][column]", "0"),
                ("order[0][dir]", "asc"),
            ],
        )
        .await
        .unwrap();
    let table: InfractionTable = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(table.draw, 4);
    assert_eq!(table.records_total, 50);
    assert_eq!(table.records_filtered, 10);
    assert_eq!(table.data.len(), 10);
    assert!(table.data.iter().all(|row| row["type"] == "warning"));

    let ids: Vec<i64> = table.data.iter().map(|row| row["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_infraction_invalid_column() {
    let Some((server, guild)) = setup().await else { return };
    let token = server.session(guild.viewer).unwrap();

    let response = server
        .get_query(&guild.api("/infractions"), &token, &[("order[0][column]", "10")])
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, "Invalid Column");
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_stats_without_channels() {
    let Some((server, guild)) = setup().await else { return };
    let token = server.session(guild.viewer).unwrap();

    let response = server
        .get_query(&guild.api("/stats/messages"), &token, &[("mode", "24h")])
        .await
        .unwrap();
    let stats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        stats,
        json!({"data": [["created"], ["updated"], ["deleted"], ["mentions"]]})
    );

    let response = server
        .get_query(&guild.api("/stats/messages"), &token, &[("mode", "90d")])
        .await
        .unwrap();
    let body = assert_text(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, "Invalid Mode");
}
