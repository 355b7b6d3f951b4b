use crate::common::{BEARER, TOKEN, create_test_client};
use mockito::{Matcher, Server};
use serde_json::json;
use uptime_client::prelude::*;

#[tokio::test]
async fn test_create_monitor() {
    let mut server = Server::new_async().await;
    let monitor = json!({"name": "api", "url": "https://example.com", "type": "http"});
    let mock = server
        .mock("POST", "/monitors")
        .match_header("authorization", BEARER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(monitor.clone()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"_id":"m1"}}"#)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let response = client.create_monitor(TOKEN, &monitor).await.unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["_id"], "m1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_monitors_by_user_id_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/monitors/user/u1")
        .match_query(Matcher::Exact(
            "limit=10&type=http&type=ping&status=up&sortOrder=asc".to_string(),
        ))
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let types = ["http", "ping"];
    let query = MonitorsQuery::new()
        .with_limit(10)
        .with_types(&types)
        .with_status("up")
        .with_sort_order(SortOrder::Asc);
    let response = client
        .get_monitors_by_user_id(TOKEN, "u1", &query)
        .await
        .unwrap();

    assert_eq!(response.body, json!({"data": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_monitors_by_user_id_without_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/monitors/user/u1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    client
        .get_monitors_by_user_id(TOKEN, "u1", &MonitorsQuery::new())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_stats_by_monitor_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/monitors/stats/m1")
        .match_query(Matcher::Exact(
            "sortOrder=desc&dateRange=month&numToDisplay=30&normalize=true".to_string(),
        ))
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(r#"{"data":{"uptime":0.99}}"#)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let query = StatsQuery::new()
        .with_sort_order(SortOrder::Desc)
        .with_date_range("month")
        .with_num_to_display(30)
        .with_normalize(true);
    let response = client
        .get_stats_by_monitor_id(TOKEN, "m1", &query)
        .await
        .unwrap();

    assert_eq!(response.body["data"]["uptime"], 0.99);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_monitor() {
    let mut server = Server::new_async().await;
    let fields = json!({"interval": 60000});
    let mock = server
        .mock("PUT", "/monitors/m1")
        .match_header("authorization", BEARER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(fields.clone()))
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    client.update_monitor(TOKEN, "m1", &fields).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_monitor_by_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/monitors/m1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let response = client.delete_monitor_by_id(TOKEN, "m1").await.unwrap();

    assert_eq!(response.body, serde_json::Value::Null);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_certificate_expiry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/monitors/certificate/m1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body(r#"{"data":{"certificateDate":"2027-01-01T00:00:00Z"}}"#)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let response = client.get_certificate_expiry(TOKEN, "m1").await.unwrap();

    assert_eq!(
        response.body["data"]["certificateDate"],
        "2027-01-01T00:00:00Z"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/monitors/certificate/m1")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let (client, _) = create_test_client(&format!("{}/api/v1", server.url()));
    client.get_certificate_expiry(TOKEN, "m1").await.unwrap();
    mock.assert_async().await;
}
