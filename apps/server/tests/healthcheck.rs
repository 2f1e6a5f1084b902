use actix_web::{test, web, App};
use egon_server::health::API_DESCRIPTION;
use egon_server::{routes, AppState};
use sea_orm::Database;

async fn test_state() -> web::Data<AppState> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory database");
    web::Data::new(AppState::new(db))
}

#[actix_web::test]
async fn test_health_endpoint() {
    let data = test_state().await;
    let app =
        test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "health body must be empty");
}

#[actix_web::test]
async fn test_health_is_idempotent() {
    let data = test_state().await;
    let app =
        test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }
}

#[actix_web::test]
async fn test_description_endpoint() {
    let data = test_state().await;
    let app =
        test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/description").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(
        body,
        "The Egon Framework status API. \
         See https://egon-framework.github.io/status-api/ for more details."
    );
    assert_eq!(body, API_DESCRIPTION.as_bytes());
}

#[actix_web::test]
async fn test_description_is_stable_across_calls() {
    let data = test_state().await;
    let app =
        test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/description").to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        assert_eq!(body, API_DESCRIPTION.as_bytes());
    }
}
