mod support;

use serde_json::json;
use support::{send, send_raw, spawn_app, ADMIN_TOKEN, USER_TOKEN};

const BASES: [&str; 5] = [
    "/api/recommendationrequests",
    "/api/menuitemreview",
    "/api/UCSBOrganization",
    "/api/ucsbdiningcommonsmenuitem",
    "/api/articles",
];

fn key_query(base: &str) -> &'static str {
    if base == "/api/UCSBOrganization" {
        "orgCode=ZPR"
    } else {
        "id=1"
    }
}

#[tokio::test]
async fn logged_out_callers_are_denied_everywhere() {
    let addr = spawn_app().await;

    for base in BASES {
        let key = key_query(base);
        let calls = [
            ("GET", format!("{base}/all")),
            ("POST", format!("{base}/post")),
            ("GET", format!("{base}?{key}")),
            ("PUT", format!("{base}?{key}")),
            ("DELETE", format!("{base}?{key}")),
        ];
        for (method, path) in calls {
            let response = send(addr, method, &path, None, None).await;
            assert_eq!(response.status, 403, "{method} {path}");
            assert_eq!(
                response.json(),
                json!({"type": "AccessDeniedException", "message": "Access Denied"}),
                "{method} {path}"
            );
        }
    }
}

#[tokio::test]
async fn users_can_read_but_not_write() {
    let addr = spawn_app().await;

    for base in BASES {
        let key = key_query(base);
        let list = send(addr, "GET", &format!("{base}/all"), Some(USER_TOKEN), None).await;
        assert_eq!(list.status, 200, "list {base}");
        assert_eq!(list.json(), json!([]));

        for (method, path) in [
            ("POST", format!("{base}/post")),
            ("PUT", format!("{base}?{key}")),
            ("DELETE", format!("{base}?{key}")),
        ] {
            let response = send(addr, method, &path, Some(USER_TOKEN), Some("{}")).await;
            assert_eq!(response.status, 403, "{method} {path}");
        }
    }
}

#[tokio::test]
async fn unknown_or_malformed_tokens_are_unauthenticated() {
    let addr = spawn_app().await;

    let unknown = send(addr, "GET", "/api/articles/all", Some("nope"), None).await;
    assert_eq!(unknown.status, 403);

    let basic = send_raw(
        addr,
        "GET",
        "/api/articles/all",
        &[("Authorization", "Basic YWRtaW46YWRtaW4=")],
        None,
    )
    .await;
    assert_eq!(basic.status, 403);
}

#[tokio::test]
async fn denied_create_never_persists() {
    let addr = spawn_app().await;
    let path = "/api/ucsbdiningcommonsmenuitem/post?diningCommonsCode=ortega&name=Chicken+Caesar+Salad&station=Entrees";

    let anonymous = send(addr, "POST", path, None, None).await;
    assert_eq!(anonymous.status, 403);
    let user = send(addr, "POST", path, Some(USER_TOKEN), None).await;
    assert_eq!(user.status, 403);

    let all = send(addr, "GET", "/api/ucsbdiningcommonsmenuitem/all", Some(ADMIN_TOKEN), None).await;
    assert_eq!(all.status, 200);
    assert_eq!(all.json(), json!([]));
}

#[tokio::test]
async fn system_info_is_public_and_current_user_reports_roles() {
    let addr = spawn_app().await;

    let info = send(addr, "GET", "/api/systemInfo", None, None).await;
    assert_eq!(info.status, 200);
    assert_eq!(info.json()["name"], "ucsb-api");
    assert!(info.json()["version"].as_str().is_some_and(|v| !v.is_empty()));

    let anonymous = send(addr, "GET", "/api/currentUser", None, None).await;
    assert_eq!(anonymous.status, 403);

    let admin = send(addr, "GET", "/api/currentUser", Some(ADMIN_TOKEN), None).await;
    assert_eq!(admin.status, 200);
    assert_eq!(
        admin.json(),
        json!({"email": "admin@ucsb.edu", "roles": ["USER", "ADMIN"]})
    );

    let user = send(addr, "GET", "/api/currentUser", Some(USER_TOKEN), None).await;
    assert_eq!(user.json(), json!({"email": "student@ucsb.edu", "roles": ["USER"]}));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let addr = spawn_app().await;

    let generated = send(addr, "GET", "/api/systemInfo", None, None).await;
    let id = generated.header("x-request-id").expect("generated request id");
    assert_eq!(id.len(), 36);

    let denied = send(addr, "GET", "/api/articles/all", None, None).await;
    assert!(denied.header("x-request-id").is_some());

    let echoed = send_raw(
        addr,
        "GET",
        "/api/systemInfo",
        &[("x-request-id", "trace-42")],
        None,
    )
    .await;
    assert_eq!(echoed.header("x-request-id").as_deref(), Some("trace-42"));
}
