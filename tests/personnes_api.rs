//! End-to-end tests for the person CRUD endpoints.

use axum::http::StatusCode;
use serde_json::{json, Value};

use personnes_gateway::http::HttpServer;
use personnes_gateway::store::{Person, PersonStore};

mod common;

fn seeded_app() -> axum::Router {
    let config = common::test_config(&common::closed_endpoint());
    HttpServer::new(config).unwrap().router()
}

fn prenoms(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|p| p["prenom"].as_str().unwrap_or(""))
        .collect()
}

#[tokio::test]
async fn test_seeded_scenario() {
    let app = seeded_app();

    let (status, headers, list) = common::send(&app, "GET", "/personnes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/json"
    );
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);

    let (status, _, axel) = common::send(&app, "GET", "/personnes/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        axel,
        json!({
            "id": "6",
            "prenom": "Axel",
            "nom": "Prieur",
            "addresse": {"ville": "Paris", "pays": "France"}
        })
    );

    let (status, _, after_delete) = common::send(&app, "DELETE", "/personnes/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after_delete.as_array().unwrap().len(), 6);

    let (_, _, list) = common::send(&app, "GET", "/personnes", None).await;
    assert_eq!(list.as_array().unwrap().len(), 6);
    assert!(!prenoms(&list).contains(&"Lucas"));

    let (status, _, created) =
        common::send(&app, "POST", "/personnes/8", Some(r#"{"prenom":"Test"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.as_array().unwrap().len(), 7);

    let (status, _, test) = common::send(&app, "GET", "/personnes/8", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(test["id"], "8");
    assert_eq!(test["prenom"], "Test");
    assert!(test.get("nom").is_none());
}

#[tokio::test]
async fn test_get_unknown_id_returns_empty_shell() {
    let app = seeded_app();

    let (status, _, body) = common::send(&app, "GET", "/personnes/does-not-exist", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_create_grows_list_by_one_whatever_the_body() {
    let app = seeded_app();
    let bodies = [
        Some(r#"{"prenom":"Valid","nom":"Body"}"#),
        Some("{definitely not json"),
        Some(r#"["an", "array"]"#),
        None,
    ];

    let mut expected_len = 7;
    for (i, body) in bodies.into_iter().enumerate() {
        let uri = format!("/personnes/new-{i}");
        let (status, _, list) = common::send(&app, "POST", &uri, body).await;
        expected_len += 1;

        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), expected_len);
        assert_eq!(list.last().unwrap()["id"], format!("new-{i}"));
    }

    let (_, _, malformed) = common::send(&app, "GET", "/personnes/new-1", None).await;
    assert_eq!(malformed, json!({"id": "new-1"}));
}

#[tokio::test]
async fn test_body_id_is_overwritten_by_path() {
    let app = seeded_app();

    let (_, _, list) = common::send(
        &app,
        "POST",
        "/personnes/42",
        Some(r#"{"id":"999","prenom":"Path","addresse":{"ville":"Lyon"}}"#),
    )
    .await;

    let last = list.as_array().unwrap().last().unwrap().clone();
    assert_eq!(
        last,
        json!({"id": "42", "prenom": "Path", "addresse": {"ville": "Lyon"}})
    );

    let (_, _, missing) = common::send(&app, "GET", "/personnes/999", None).await;
    assert_eq!(missing, json!({}));
}

#[tokio::test]
async fn test_delete_unknown_id_returns_list_unchanged() {
    let app = seeded_app();

    let (_, _, before) = common::send(&app, "GET", "/personnes", None).await;
    let (status, _, after) = common::send(&app, "DELETE", "/personnes/nope", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_removes_first_duplicate_only() {
    let store = PersonStore::with_records(vec![
        Person::new("x", "premier", ""),
        Person::new("y", "autre", ""),
        Person::new("x", "second", ""),
    ]);
    let config = common::test_config(&common::closed_endpoint());
    let app = HttpServer::with_store(config, store.clone()).unwrap().router();

    let (_, _, list) = common::send(&app, "DELETE", "/personnes/x", None).await;
    assert_eq!(prenoms(&list), ["autre", "second"]);

    let (_, _, found) = common::send(&app, "GET", "/personnes/x", None).await;
    assert_eq!(found["prenom"], "second");
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_unseeded_store_lists_empty_array() {
    let mut config = common::test_config(&common::closed_endpoint());
    config.store.seed_demo_records = false;
    let app = HttpServer::new(config).unwrap().router();

    let (status, _, list) = common::send(&app, "GET", "/personnes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_strict_mode_rejects_malformed_body() {
    let mut config = common::test_config(&common::closed_endpoint());
    config.api.strict_mode = true;
    let server = HttpServer::new(config).unwrap();
    let app = server.router();

    let (status, _, body) =
        common::send(&app, "POST", "/personnes/8", Some("{broken")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("request body is not a valid person"));
    assert_eq!(server.store().len().await, 7);

    let (status, _, list) = common::send(&app, "POST", "/personnes/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = seeded_app();

    let (_, headers, _) = common::send(&app, "GET", "/personnes", None).await;
    let id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_null_fields_keep_the_rest_of_the_body() {
    for strict_mode in [false, true] {
        let mut config = common::test_config(&common::closed_endpoint());
        config.api.strict_mode = strict_mode;
        let app = HttpServer::new(config).unwrap().router();

        let (status, _, list) = common::send(
            &app,
            "POST",
            "/personnes/8",
            Some(r#"{"prenom":null,"nom":"Durand"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "strict_mode = {strict_mode}");
        assert_eq!(list.as_array().unwrap().len(), 8);

        let (_, _, created) = common::send(&app, "GET", "/personnes/8", None).await;
        assert_eq!(created, json!({"id": "8", "nom": "Durand"}));
    }
}

#[tokio::test]
async fn test_body_keys_are_case_insensitive_and_trailing_data_ignored() {
    let app = seeded_app();

    common::send(
        &app,
        "POST",
        "/personnes/8",
        Some(r#"{"Prenom":"Test","Addresse":{"Pays":"Suisse"}} trailing"#),
    )
    .await;

    let (_, _, created) = common::send(&app, "GET", "/personnes/8", None).await;
    assert_eq!(
        created,
        json!({"id": "8", "prenom": "Test", "addresse": {"pays": "Suisse"}})
    );
}
