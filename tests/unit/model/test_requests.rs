use serde_json::json;
use uptime_client::model::requests::{
    ChecksQuery, InvitationRequest, InvitationVerifyRequest, MonitorsQuery, RecoveryTokenRequest,
    SortOrder, StatsQuery,
};

#[test]
fn test_monitors_query_full() {
    let types = ["http", "ping"];
    let query = MonitorsQuery::new()
        .with_limit(10)
        .with_types(&types)
        .with_status("up")
        .with_sort_order(SortOrder::Asc);

    assert_eq!(
        query.to_query().to_query_string(),
        "limit=10&type=http&type=ping&status=up&sortOrder=asc"
    );
}

#[test]
fn test_monitors_query_normalize_is_last() {
    let query = MonitorsQuery::new()
        .with_normalize(true)
        .with_limit(5);
    assert_eq!(query.to_query().to_query_string(), "limit=5&normalize=true");
}

#[test]
fn test_monitors_query_zero_limit_is_sent() {
    let query = MonitorsQuery::new().with_limit(0);
    assert_eq!(query.to_query().to_query_string(), "limit=0");
}

#[test]
fn test_monitors_query_empty() {
    assert!(MonitorsQuery::new().to_query().is_empty());
}

#[test]
fn test_stats_query_order() {
    let query = StatsQuery::new()
        .with_normalize(false)
        .with_num_to_display(50)
        .with_date_range("week")
        .with_limit(100)
        .with_sort_order(SortOrder::Desc);

    assert_eq!(
        query.to_query().to_query_string(),
        "sortOrder=desc&limit=100&dateRange=week&numToDisplay=50&normalize=false"
    );
}

#[test]
fn test_checks_query_order() {
    let query = ChecksQuery::new()
        .with_rows_per_page(25)
        .with_page(2)
        .with_filter("down")
        .with_date_range("day")
        .with_limit(500)
        .with_sort_order(SortOrder::Desc);

    assert_eq!(
        query.to_query().to_query_string(),
        "sortOrder=desc&limit=500&dateRange=day&filter=down&page=2&rowsPerPage=25"
    );
}

#[test]
fn test_checks_query_first_page_is_sent() {
    let query = ChecksQuery::new().with_page(0).with_rows_per_page(10);
    assert_eq!(query.to_query().to_query_string(), "page=0&rowsPerPage=10");
}

#[test]
fn test_sort_order_serialization() {
    assert_eq!(serde_json::to_value(SortOrder::Asc).unwrap(), json!("asc"));
    assert_eq!(SortOrder::Desc.to_string(), "desc");
    let parsed: SortOrder = serde_json::from_str(r#""desc""#).unwrap();
    assert_eq!(parsed, SortOrder::Desc);
}

#[test]
fn test_body_models_wire_names() {
    let recovery = RecoveryTokenRequest {
        recovery_token: "rt".to_string(),
    };
    assert_eq!(serde_json::to_value(&recovery).unwrap(), json!({"recoveryToken": "rt"}));

    let invite = InvitationRequest {
        email: "ops@example.com".to_string(),
        role: "admin".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&invite).unwrap(),
        json!({"email": "ops@example.com", "role": "admin"})
    );

    let verify = InvitationVerifyRequest {
        token: "inv".to_string(),
    };
    assert_eq!(serde_json::to_value(&verify).unwrap(), json!({"token": "inv"}));
}
