//! Endpoint tests for the player identity surface.

use actix_web::{test, web, App};
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn players_can_be_registered_and_listed() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let alice: Value = test::read_body_json(resp).await;
    assert_eq!(alice["name"], "Alice");
    let alice_id = alice["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{alice_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, alice);

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn duplicate_names_conflict() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_NAME_TAKEN");
}

#[actix_web::test]
async fn blank_names_are_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn missing_players_yield_404() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/players/41").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_NOT_FOUND");

    let req = test::TestRequest::delete().uri("/api/players/41").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn deleting_a_player_frees_the_name() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let alice: Value = test::read_body_json(resp).await;
    let alice_id = alice["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{alice_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
}
