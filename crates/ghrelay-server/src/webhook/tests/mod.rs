//! Webhook tests.


use actix_web::{body::MessageBody, dev::ServiceResponse, http::StatusCode, test, web::Data};
use ghrelay_config::Config;
use ghrelay_crypto::Signature;
use ghrelay_ghapi_interface::MockApiService;
use ghrelay_notifier_interface::MockNotifierService;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER},
    server::{build_actix_app, AppContext},
};

const WEBHOOK_SECRET: &str = "iAmAsEcReTkEy";
const CHANNEL_ID: &str = "1234567890";

fn test_config() -> Config {
    let mut config = Config::from_env();
    config.github_webhook_secret = WEBHOOK_SECRET.into();
    config.discord_channel_id = CHANNEL_ID.into();
    config.repository_owner = "me".into();
    config.repository_name = "repo".into();
    config.server_disable_webhook_signature = false;
    config
}

fn test_context(notifier_service: MockNotifierService) -> Data<AppContext> {
    Data::new(AppContext::new_with_adapters(
        test_config(),
        Box::new(MockApiService::new()),
        Box::new(notifier_service),
    ))
}

fn expect_delivery(content_part: &'static str) -> MockNotifierService {
    let mut notifier_service = MockNotifierService::new();
    notifier_service
        .expect_message_send()
        .withf(move |channel_id, content| channel_id == CHANNEL_ID && content.contains(content_part))
        .times(1)
        .returning(|_, _| Ok(()));
    notifier_service
}

async fn post_signed_event(
    ctx: Data<AppContext>,
    event_type: &str,
    body: &'static str,
) -> ServiceResponse<impl MessageBody> {
    let signature = Signature::generate(body.as_bytes(), WEBHOOK_SECRET.as_bytes()).unwrap();
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, event_type))
        .insert_header((GITHUB_SIGNATURE_HEADER, signature))
        .set_payload(body)
        .to_request();

    test::call_service(&app, req).await
}

#[actix_web::test]
async fn test_push_event_delivers_notification() {
    let ctx = test_context(expect_delivery("New push by Ada Lovelace"));
    let resp = post_signed_event(ctx, "push", fixtures::PUSH_EVENT_DATA).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_pull_request_event_delivers_notification() {
    let ctx = test_context(expect_delivery("Pull Request opened by bob: #42"));
    let resp = post_signed_event(ctx, "pull_request", fixtures::PULL_REQUEST_OPENED_DATA).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_issues_event_delivers_notification() {
    let ctx = test_context(expect_delivery("Issue closed by alice: #7"));
    let resp = post_signed_event(ctx, "issues", fixtures::ISSUES_CLOSED_DATA).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_ping_event_is_acknowledged_without_delivery() {
    let ctx = test_context(MockNotifierService::new());
    let resp = post_signed_event(ctx, "ping", fixtures::PING_EVENT_DATA).await;

    assert_eq!(resp.status(), StatusCode::ACCEPTED);
}

#[actix_web::test]
async fn test_unhandled_event_type_is_acknowledged() {
    let ctx = test_context(MockNotifierService::new());
    let resp = post_signed_event(ctx, "deployment_status", r#"{"anything": true}"#).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_malformed_payload_is_acknowledged_without_delivery() {
    let ctx = test_context(MockNotifierService::new());
    let resp = post_signed_event(ctx, "issues", r#"{"action": "closed", "issue": {}}"#).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_missing_signature_is_rejected() {
    let ctx = test_context(MockNotifierService::new());
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();

    let Err(err) = test::try_call_service(&app, req).await else {
        panic!("a request without signature should be rejected");
    };
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_invalid_signature_is_rejected() {
    let ctx = test_context(MockNotifierService::new());
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .insert_header((
            GITHUB_SIGNATURE_HEADER,
            "sha256=290c9b550e7d976ab9f3ccb4fc31b2b571cd55e6ed49adbbc60772d7f1ac7c5c",
        ))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();

    let Err(err) = test::try_call_service(&app, req).await else {
        panic!("a request with a mismatched signature should be rejected");
    };
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::FORBIDDEN
    );
}

#[actix_web::test]
async fn test_unknown_signature_scheme_is_rejected() {
    let ctx = test_context(MockNotifierService::new());
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .insert_header((GITHUB_SIGNATURE_HEADER, "sha1=deadbeef"))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();

    let Err(err) = test::try_call_service(&app, req).await else {
        panic!("a request with an unknown signature scheme should be rejected");
    };
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::FORBIDDEN
    );
}

#[actix_web::test]
async fn test_disabled_verification_accepts_unsigned_requests() {
    let mut config = test_config();
    config.server_disable_webhook_signature = true;

    let ctx = Data::new(AppContext::new_with_adapters(
        config,
        Box::new(MockApiService::new()),
        Box::new(expect_delivery("New push by Ada Lovelace")),
    ));
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_empty_secret_disables_verification() {
    let mut config = test_config();
    config.github_webhook_secret = String::new();

    let ctx = Data::new(AppContext::new_with_adapters(
        config,
        Box::new(MockApiService::new()),
        Box::new(expect_delivery("New push by Ada Lovelace")),
    ));
    let app = test::init_service(build_actix_app(ctx)).await;
    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header((GITHUB_EVENT_HEADER, "push"))
        .set_payload(fixtures::PUSH_EVENT_DATA)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
