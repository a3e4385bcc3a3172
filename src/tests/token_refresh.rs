// Token manager behaviour against live local servers:
//  - cached token reuse and the refresh safety margin
//  - one refresh for many concurrent callers
//  - failures leave the cache empty and the next call retries

#[cfg(test)]
mod test {

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Form, Json, Router};
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::tests::common::{
        build_client, credentials, mock_token_endpoint, spawn_axum, spawn_truncated_responder, token_body,
        TEST_ACCESS_TOKEN, TEST_CLIENT_ID, TEST_CLIENT_SECRET,
    };
    use crate::{Client, Scope};

    /// Token route that counts calls and waits `delay` before answering.
    fn counting_token_router(counter: Arc<AtomicUsize>, delay: Duration, expires_in: i64) -> Router {
        Router::new().route(
            "/oauth/v2/token",
            post(move || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    tokio::time::sleep(delay).await;
                    Json(token_body(&format!("tok-{n}"), expires_in))
                }
            }),
        )
    }

    #[tokio::test]
    async fn valid_token_is_served_from_cache() {
        let server = MockServer::start_async().await;
        let token_mock = mock_token_endpoint(&server, 3600).await;
        let client = build_client(&server.base_url());

        let first = client.token().await.unwrap();
        let second = client.token().await.unwrap();

        assert_eq!(first.access_token, TEST_ACCESS_TOKEN);
        assert_eq!(first, second);
        assert_eq!(token_mock.hits_async().await, 1);
        assert!(client.metrics().render().contains("interbank_token_cache_hits_total 1"));
        assert!(client.metrics().render().contains("interbank_token_refresh_requests_total 1"));
    }

    #[tokio::test]
    async fn token_inside_safety_margin_is_refreshed() {
        let server = MockServer::start_async().await;
        // 180s lifetime equals the margin: stale as soon as it is issued
        let token_mock = mock_token_endpoint(&server, 180).await;
        let client = build_client(&server.base_url());

        let first = client.token().await.unwrap();
        assert!(!first.is_valid());
        client.token().await.unwrap();

        assert_eq!(token_mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn expiry_is_lifetime_minus_margin() {
        let server = MockServer::start_async().await;
        mock_token_endpoint(&server, 3600).await;
        let client = build_client(&server.base_url());

        let before = chrono::Utc::now();
        let token = client.token().await.unwrap();
        let after = chrono::Utc::now();

        let expires_at = token.expires_at().unwrap();
        assert!(expires_at >= before + chrono::Duration::seconds(3600 - 180));
        assert!(expires_at <= after + chrono::Duration::seconds(3600 - 180));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_refresh() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_token_router(counter.clone(), Duration::from_millis(200), 3600);
        let (server_h, addr) = spawn_axum(router).await;
        let client = build_client(&format!("http://{addr}"));

        let callers: Vec<_> = (0..10)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.token().await })
            })
            .collect();

        for caller in callers {
            let token = caller.await.unwrap().unwrap();
            assert_eq!(token.access_token, "tok-1");
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        server_h.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_each_see_the_rejection() {
        let counter = Arc::new(AtomicUsize::new(0));
        let calls = counter.clone();
        let router = Router::new().route(
            "/oauth/v2/token",
            post(move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    (StatusCode::UNAUTHORIZED, "invalid client")
                }
            }),
        );
        let (server_h, addr) = spawn_axum(router).await;
        let client = build_client(&format!("http://{addr}"));

        let callers: Vec<_> = (0..5)
            .map(|_| {
                let client = client.clone();
                tokio::spawn(async move { client.token().await })
            })
            .collect();

        for caller in callers {
            let err = caller.await.unwrap().unwrap_err();
            assert_eq!(err.status(), Some(401));
            assert_eq!(err.as_response().unwrap().message(), "invalid client");
        }
        // nothing is cached, so every waiter makes its own attempt
        assert_eq!(counter.load(Ordering::SeqCst), 5);

        server_h.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn transport_failure_is_not_cached() {
        // first call outlives the client timeout, later calls answer at once
        let counter = Arc::new(AtomicUsize::new(0));
        let calls = counter.clone();
        let router = Router::new().route(
            "/oauth/v2/token",
            post(move || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    if n == 1 {
                        tokio::time::sleep(Duration::from_secs(2)).await;
                    }
                    Json(token_body(&format!("tok-{n}"), 3600))
                }
            }),
        );
        let (server_h, addr) = spawn_axum(router).await;
        let client = Client::builder()
            .credentials(credentials())
            .base_url(format!("http://{addr}"))
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap();

        let err = client.token().await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(0));
        let response = err.as_response().unwrap();
        assert_eq!(response.title(), "Request Failed");
        assert!(!response.message().is_empty());

        let token = client.token().await.unwrap();
        assert_eq!(token.access_token, "tok-2");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(client.metrics().render().contains(r#"interbank_token_refresh_failures_total{reason="transport"} 1"#));

        server_h.abort();
    }

    #[tokio::test]
    async fn unreachable_token_endpoint_reports_status_zero() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = build_client(&format!("http://{addr}"));
        let err = client.token().await.unwrap_err();
        assert_eq!(err.status(), Some(0));
        assert!(err.to_string().starts_with("0 Request Failed: "));
    }

    #[tokio::test]
    async fn rejected_credentials_surface_status_and_body() {
        let server = MockServer::start_async().await;
        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/v2/token");
                then.status(401).body("invalid client");
            })
            .await;
        let client = build_client(&server.base_url());

        let err = client.token().await.unwrap_err();
        let response = err.as_response().unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(response.title(), "Unauthorized");
        assert_eq!(response.message(), "invalid client");

        // nothing cached: the next call asks again
        assert!(client.token().await.is_err());
        assert_eq!(token_mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn malformed_token_body_is_a_decoding_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/v2/token");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;
        let client = build_client(&server.base_url());

        let err = client.token().await.unwrap_err();
        let response = err.as_response().unwrap();
        assert_eq!(response.status, 200);
        assert!(response.message().starts_with("unexpected response body"));
    }

    #[tokio::test]
    async fn out_of_range_lifetime_is_a_decoding_error() {
        let server = MockServer::start_async().await;
        let token_mock = mock_token_endpoint(&server, 100_000_000_000_000_000).await;
        let client = build_client(&server.base_url());

        let err = client.token().await.unwrap_err();
        let response = err.as_response().unwrap();
        assert_eq!(response.status, 200);
        assert!(response.message().starts_with("unexpected response body"));
        assert!(client.metrics().render().contains(r#"interbank_token_refresh_failures_total{reason="decode"} 1"#));

        // the lock was released and nothing was cached
        assert!(client.token().await.is_err());
        assert_eq!(token_mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn rejection_with_unreadable_body_keeps_its_status() {
        let (server_h, addr) = spawn_truncated_responder("401 Unauthorized", false).await;
        let client = build_client(&format!("http://{addr}"));

        let err = client.token().await.unwrap_err();
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.as_response().unwrap().title(), "Unauthorized");
        assert!(client.metrics().render().contains(r#"interbank_token_refresh_failures_total{reason="status"} 1"#));

        server_h.abort();
    }

    #[tokio::test]
    async fn token_request_sends_form_and_account_header() {
        let captured: Arc<Mutex<Option<(HashMap<String, String>, Option<String>)>>> = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let router = Router::new().route(
            "/oauth/v2/token",
            post(move |headers: HeaderMap, Form(form): Form<HashMap<String, String>>| {
                let sink = sink.clone();
                async move {
                    let account = headers.get("x-conta-corrente").and_then(|v| v.to_str().ok()).map(str::to_owned);
                    *sink.lock().unwrap() = Some((form, account));
                    (StatusCode::OK, Json(json!({"access_token": "abc", "token_type": "Bearer", "expires_in": 3600})))
                }
            }),
        );
        let (server_h, addr) = spawn_axum(router).await;

        let client = Client::builder()
            .credentials(credentials().with_scopes([Scope::EXTRATO_READ, Scope::PIX_READ]))
            .base_url(format!("http://{addr}"))
            .account_number("123456789")
            .build()
            .unwrap();
        let token = client.token().await.unwrap();
        assert_eq!(token.authorization(), "Bearer abc");

        let (form, account) = captured.lock().unwrap().take().unwrap();
        assert_eq!(form.get("client_id").map(String::as_str), Some(TEST_CLIENT_ID));
        assert_eq!(form.get("client_secret").map(String::as_str), Some(TEST_CLIENT_SECRET));
        assert_eq!(form.get("grant_type").map(String::as_str), Some("client_credentials"));
        assert_eq!(form.get("scope").map(String::as_str), Some("extrato.read pix.read"));
        assert_eq!(account.as_deref(), Some("123456789"));

        server_h.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn abandoned_refresh_releases_the_lock() {
        let counter = Arc::new(AtomicUsize::new(0));
        let router = counting_token_router(counter.clone(), Duration::from_millis(600), 3600);
        let (server_h, addr) = spawn_axum(router).await;
        let client = build_client(&format!("http://{addr}"));

        let abandoned = tokio::time::timeout(Duration::from_millis(150), client.token()).await;
        assert!(abandoned.is_err());

        let token = tokio::time::timeout(Duration::from_secs(3), client.token()).await.unwrap().unwrap();
        assert!(token.is_valid());
        assert!(counter.load(Ordering::SeqCst) >= 1);

        server_h.abort();
    }
}
