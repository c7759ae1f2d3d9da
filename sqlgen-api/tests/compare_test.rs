mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::{ollama_envelope, setup_test_app, test_state, UNREACHABLE_URL};
use mockito::Matcher;
use serde_json::{json, Value};

fn comparison_body() -> Value {
    json!({
        "db_schema": "CREATE TABLE orders (id INTEGER PRIMARY KEY, total REAL);",
        "question": "How many orders are there?",
        "model_name": "phi4:14b",
        "gt_sql": "SELECT COUNT(*) FROM orders",
        "gen_sql": "SELECT COUNT(id) FROM orders",
        "server_url": ""
    })
}

#[actix_rt::test]
async fn test_compare_extracts_resolve_yn() {
    let raw = ollama_envelope(r#"{"resolve_yn":"yes"}"#);

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "phi4:14b",
                "stream": false,
                "format": {
                    "type": "object",
                    "properties": { "resolve_yn": { "type": "string" } },
                    "required": ["resolve_yn"]
                }
            })),
            Matcher::Regex("SELECT COUNT\\(id\\) FROM orders".to_string()),
        ]))
        .with_status(200)
        .with_body(&raw)
        .create_async()
        .await;

    let app = setup_test_app(test_state(&server.url(), vec![])).await;
    let req = TestRequest::post()
        .uri("/compare")
        .set_json(comparison_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"resolve_yn": "yes", "debug_response": raw}));
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_compare_accepts_frontend_field_names() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Regex("Ground truth SQL: SELECT 42".to_string()))
        .with_status(200)
        .with_body(ollama_envelope(r#"{"resolve_yn":"no"}"#))
        .create_async()
        .await;

    let app = setup_test_app(test_state(&server.url(), vec![])).await;
    let req = TestRequest::post()
        .uri("/compare")
        .set_json(json!({
            "db_schema": "",
            "question": "",
            "model_name": "phi4:14b",
            "server_url": "",
            "gtSql": "SELECT 42",
            "genSql": "SELECT 41"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["resolve_yn"], "no");
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_compare_repeated_request_is_stable() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(ollama_envelope(r#"{"resolve_yn":"yes"}"#))
        .expect(2)
        .create_async()
        .await;

    let app = setup_test_app(test_state(&server.url(), vec![])).await;

    let mut verdicts = Vec::new();
    for _ in 0..2 {
        let req = TestRequest::post()
            .uri("/compare")
            .set_json(comparison_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        verdicts.push(body["resolve_yn"].clone());
    }

    assert_eq!(verdicts[0], verdicts[1]);
    assert_eq!(verdicts[0], "yes");
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_compare_inner_not_json_degrades() {
    let raw = ollama_envelope("yes");

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(&raw)
        .create_async()
        .await;

    let app = setup_test_app(test_state(&server.url(), vec![])).await;
    let req = TestRequest::post()
        .uri("/compare")
        .set_json(comparison_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"resolve_yn": "", "debug_response": raw}));
}

#[actix_rt::test]
async fn test_compare_outer_not_json_returns_raw_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body("truncated {\"resp")
        .create_async()
        .await;

    let app = setup_test_app(test_state(&server.url(), vec![])).await;
    let req = TestRequest::post()
        .uri("/compare")
        .set_json(comparison_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["debug_response"], "truncated {\"resp");
    assert!(body.get("resolve_yn").is_none());
}

#[actix_rt::test]
async fn test_compare_unreachable_server_is_500() {
    let app = setup_test_app(test_state(UNREACHABLE_URL, vec![])).await;
    let req = TestRequest::post()
        .uri("/compare")
        .set_json(comparison_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
