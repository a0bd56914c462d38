//! Token lifecycle against a mock OAuth endpoint: demand-driven refresh,
//! expiry handling, and exchange failure modes.

mod common;

use common::{server_options, token_body};
use gigachat::{AuthScheme, Error, GigaChat};
use mockito::Matcher;

#[tokio::test]
async fn first_call_exchanges_token_once() {
    let mut server = mockito::Server::new_async().await;
    let oauth = server
        .mock("POST", "/oauth")
        .match_header("authorization", "Bearer secret-key")
        .match_header("accept", "application/json")
        .match_header(
            "rquid",
            Matcher::Regex("^[0-9a-f]{8}-[0-9a-f-]{27}$".to_string()),
        )
        .match_body(Matcher::UrlEncoded(
            "scope".into(),
            "GIGACHAT_API_PERS".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(3600))
        .expect(1)
        .create_async()
        .await;
    let models = server
        .mock("GET", "/api/v1/models")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object":"list","data":[{"id":"GigaChat"}]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    // Two calls, one exchange: the token from the first call is still valid.
    client.models().await.unwrap();
    client.models().await.unwrap();

    oauth.assert_async().await;
    models.assert_async().await;
}

#[tokio::test]
async fn expired_token_triggers_one_refresh_per_call() {
    let mut server = mockito::Server::new_async().await;
    // Zero lifetime: the token is already expired when the next call starts.
    let oauth = server
        .mock("POST", "/oauth")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(0))
        .expect(2)
        .create_async()
        .await;
    let models = server
        .mock("GET", "/api/v1/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object":"list","data":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    client.models().await.unwrap();
    client.models().await.unwrap();

    oauth.assert_async().await;
    models.assert_async().await;
}

#[tokio::test]
async fn basic_scheme_is_honored_on_the_exchange() {
    let mut server = mockito::Server::new_async().await;
    let oauth = server
        .mock("POST", "/oauth")
        .match_header("authorization", "Basic secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(3600))
        .expect(1)
        .create_async()
        .await;

    let options = server_options(&server).auth_scheme(AuthScheme::Basic);
    let client = GigaChat::builder().options(options).build().unwrap();
    client.refresh_token().await.unwrap();

    oauth.assert_async().await;
}

#[tokio::test]
async fn successful_exchange_without_token_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/oauth")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    let err = client.refresh_token().await.unwrap_err();
    assert!(matches!(err, Error::EmptyToken));
}

#[tokio::test]
async fn empty_exchange_body_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/oauth")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    let err = client.refresh_token().await.unwrap_err();
    assert!(matches!(err, Error::EmptyToken));
}

#[tokio::test]
async fn rejected_exchange_surfaces_remote_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/oauth")
        .with_status(401)
        .with_body("bad credentials")
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    let err = client.refresh_token().await.unwrap_err();
    assert_eq!(err.remote_status(), Some(401));
}

#[tokio::test]
async fn failed_refresh_blocks_the_operation() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/oauth")
        .with_status(500)
        .create_async()
        .await;
    // The models endpoint must never be reached without a token.
    let models = server
        .mock("GET", "/api/v1/models")
        .expect(0)
        .create_async()
        .await;

    let client = GigaChat::builder()
        .options(server_options(&server))
        .build()
        .unwrap();

    let err = client.models().await.unwrap_err();
    assert_eq!(err.remote_status(), Some(500));
    models.assert_async().await;
}
