use super::*;

#[test]
fn notification_deserializes_with_null_read_at() {
    let body = r#"{
        "id": "ntf_01",
        "type": "teamInvite",
        "readAt": null,
        "createdAt": "2026-08-01T09:30:00Z"
    }"#;
    let n: Notification = serde_json::from_str(body).unwrap();
    assert_eq!(n.id, "ntf_01");
    assert_eq!(n.kind, NotificationKind::TeamInvite);
    assert!(!n.is_read());
    assert!(n.created_at.is_some());
}

#[test]
fn notification_with_read_at_is_read() {
    let body = r#"{
        "id": "ntf_02",
        "type": "resourceTransfer",
        "readAt": "2026-08-01T10:00:00Z"
    }"#;
    let n: Notification = serde_json::from_str(body).unwrap();
    assert_eq!(n.kind, NotificationKind::ResourceTransfer);
    assert!(n.is_read());
}

#[test]
fn notification_without_read_at_field_is_unread() {
    let body = r#"{"id": "ntf_03", "type": "teamInvite"}"#;
    let n: Notification = serde_json::from_str(body).unwrap();
    assert!(!n.is_read());
}

#[test]
fn unknown_type_tag_maps_to_unknown() {
    let body = r#"{"id": "ntf_04", "type": "quotaWarning", "readAt": null}"#;
    let n: Notification = serde_json::from_str(body).unwrap();
    assert_eq!(n.kind, NotificationKind::Unknown);
}

#[test]
fn notification_array_parses_in_response_order() {
    let body = r#"[
        {"id": "b", "type": "teamInvite", "readAt": null},
        {"id": "a", "type": "resourceTransfer", "readAt": null}
    ]"#;
    let list: Vec<Notification> = serde_json::from_str(body).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "b");
    assert_eq!(list[1].id, "a");
}

#[test]
fn mark_read_body_shape() {
    let body = serde_json::to_string(&MarkReadRequest { read: true }).unwrap();
    assert_eq!(body, r#"{"read":true}"#);
}

#[test]
fn page_query_renders_camel_case_params() {
    let q = PageQuery {
        page: 3,
        per_page: 25,
    };
    assert_eq!(q.to_query(), "page=3&perPage=25");
    assert_eq!(PageQuery::default().to_query(), "page=1&perPage=50");
}

#[test]
fn endpoint_join_keeps_base_path() {
    let client = ApiClient::new("https://console.nimbus.dev/api").unwrap();
    let url = client.endpoint("notifications").unwrap();
    assert_eq!(url.as_str(), "https://console.nimbus.dev/api/notifications");

    // Trailing slash on the configured base must not change the result.
    let client = ApiClient::new("https://console.nimbus.dev/api/").unwrap();
    let url = client.endpoint("notifications/ntf_01").unwrap();
    assert_eq!(
        url.as_str(),
        "https://console.nimbus.dev/api/notifications/ntf_01"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    assert!(ApiClient::new("not a url").is_err());
}
