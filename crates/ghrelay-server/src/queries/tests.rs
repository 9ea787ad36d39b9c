//! Query tests.

use actix_web::{http::StatusCode, test, web::Data};
use ghrelay_config::Config;
use ghrelay_ghapi_interface::{
    types::{GhCommitInfo, GhIssue, GhRepository, GhUser},
    MockApiService,
};
use ghrelay_notifier_interface::MockNotifierService;
use pretty_assertions::assert_eq;
use time::macros::datetime;

use crate::server::{build_actix_app, AppContext};

fn test_config() -> Config {
    let mut config = Config::from_env();
    config.repository_owner = "me".into();
    config.repository_name = "repo".into();
    config
}

fn test_context(api_service: MockApiService) -> Data<AppContext> {
    Data::new(AppContext::new_with_adapters(
        test_config(),
        Box::new(api_service),
        Box::new(MockNotifierService::new()),
    ))
}

#[actix_web::test]
async fn test_repo_stats() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_repository_get()
        .withf(|owner, name| owner == "me" && name == "repo")
        .returning(|_, _| {
            Ok(GhRepository {
                name: "repo".into(),
                full_name: "me/repo".into(),
                owner: GhUser { login: "me".into() },
                stargazers_count: 10,
                forks_count: 2,
            })
        });
    api_service
        .expect_issues_count_open()
        .returning(|_, _| Ok(3));
    api_service
        .expect_pull_requests_count_open()
        .returning(|_, _| Ok(1));

    let app = test::init_service(build_actix_app(test_context(api_service))).await;
    let req = test::TestRequest::get().uri("/github/repo-stats").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "stars": 10,
            "forks": 2,
            "open_issues": 3,
            "open_pull_requests": 1
        })
    );
}

#[actix_web::test]
async fn test_latest_commit() {
    let mut api_service = MockApiService::new();
    api_service.expect_commits_get_latest().returning(|_, _| {
        Ok(GhCommitInfo {
            sha: "0d1a26e".into(),
            message: "Fix flaky webhook test".into(),
            author: "Ada Lovelace".into(),
            date: datetime!(2024-05-01 12:00:00 UTC),
            html_url: "https://github.com/me/repo/commit/0d1a26e".into(),
        })
    });

    let app = test::init_service(build_actix_app(test_context(api_service))).await;
    let req = test::TestRequest::get()
        .uri("/github/latest-commit")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Fix flaky webhook test",
            "author": "Ada Lovelace",
            "date": "2024-05-01 12:00:00",
            "url": "https://github.com/me/repo/commit/0d1a26e"
        })
    );
}

#[actix_web::test]
async fn test_create_issue() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_issues_create()
        .withf(|owner, name, title, _body, labels| {
            owner == "me" && name == "repo" && title == "Broken build" && labels.is_empty()
        })
        .returning(|_, _, title, body, _| {
            Ok(GhIssue {
                number: 101,
                title: title.into(),
                html_url: "https://github.com/me/repo/issues/101".into(),
                user: GhUser { login: "me".into() },
                body: Some(body.into()),
            })
        });

    let app = test::init_service(build_actix_app(test_context(api_service))).await;
    let req = test::TestRequest::post()
        .uri("/github/create-issue")
        .set_json(serde_json::json!({"title": "Broken build", "body": "It hurts."}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Issue created successfully",
            "issue_url": "https://github.com/me/repo/issues/101",
            "issue_number": 101
        })
    );
}

#[actix_web::test]
async fn test_repo_stats_upstream_failure() {
    let mut api_service = MockApiService::new();
    api_service.expect_repository_get().returning(|_, _| {
        Err(ghrelay_ghapi_interface::ApiError::ImplementationError {
            source: "boom".into(),
        })
    });

    let app = test::init_service(build_actix_app(test_context(api_service))).await;
    let req = test::TestRequest::get().uri("/github/repo-stats").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("API error"));
}

#[actix_web::test]
async fn test_create_issue_without_title() {
    let app = test::init_service(build_actix_app(test_context(MockApiService::new()))).await;
    let req = test::TestRequest::post()
        .uri("/github/create-issue")
        .set_json(serde_json::json!({"body": "No title here."}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
