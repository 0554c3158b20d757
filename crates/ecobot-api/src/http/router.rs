//! Axum router configuration with middleware.
//!
//! JSON routes at the top level (the widget calls them with relative
//! paths). Middleware: permissive CORS and request tracing. The static
//! widget is served from the configured public directory when it exists;
//! API routes take priority.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_dir = state.config.public_dir.clone();

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/me", get(handlers::account::me))
        .route("/signup", post(handlers::account::signup))
        .route("/login", post(handlers::account::login))
        .route("/logout", post(handlers::account::logout))
        .route("/add-points", post(handlers::points::add_points))
        .route("/converse", post(handlers::chat::converse))
        .route("/classify", post(handlers::classify::classify))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the browser widget from disk if the directory exists. Unknown
    // paths fall through to index.html.
    if std::path::Path::new(&public_dir).exists() {
        let index_path = format!("{public_dir}/index.html");
        let serve_dir = ServeDir::new(&public_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %public_dir, "static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use ecobot_core::llm::{BoxLlmProvider, LlmProvider};
    use ecobot_types::config::AppConfig;
    use ecobot_types::error::LlmError;
    use ecobot_types::llm::UserContent;

    /// Gateway stub returning a canned reply (or a canned failure).
    struct StubProvider {
        reply: Result<&'static str, ()>,
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(
            &self,
            _system_prompt: &str,
            _content: &UserContent,
        ) -> Result<String, LlmError> {
            match self.reply {
                Ok(reply) => Ok(reply.to_string()),
                Err(()) => Err(LlmError::Http("boom".to_string())),
            }
        }
    }

    struct TestApp {
        router: Router,
        // Keeps the store file alive for the duration of the test.
        _dir: tempfile::TempDir,
    }

    fn app_with(reply: Result<&'static str, ()>) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_provider(
            AppConfig::default(),
            dir.path(),
            BoxLlmProvider::new(StubProvider { reply }),
        );
        TestApp {
            router: build_router(state),
            _dir: dir,
        }
    }

    fn app() -> TestApp {
        app_with(Ok("stub reply"))
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// The session cookie pair ("ecobot_session=<uuid>") from a response.
    fn session_cookie(response: &axum::response::Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("response should set the session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn signup_body() -> serde_json::Value {
        serde_json::json!({"name": "A", "email": "a@x.com", "password": "p"})
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let response = app
            .router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_signup_creates_user_and_session() {
        let app = app();
        let response = app
            .router
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["name"], "A");
        assert_eq!(json["user"]["email"], "a@x.com");
        assert_eq!(json["user"]["ecopoints"], 0);
    }

    #[tokio::test]
    async fn test_signup_missing_fields_is_400() {
        let app = app();
        let response = app
            .router
            .oneshot(json_post(
                "/signup",
                serde_json::json!({"name": "A", "email": "a@x.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "All fields are required");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_is_400() {
        let app = app();
        app.router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_post(
                "/signup",
                serde_json::json!({"name": "B", "email": "a@x.com", "password": "other"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "User already exists!");
    }

    #[tokio::test]
    async fn test_login_after_signup() {
        let app = app();
        app.router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_post(
                "/login",
                serde_json::json!({"email": "a@x.com", "password": "p"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["ecopoints"], 0);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let app = app();
        app.router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();

        let response = app
            .router
            .oneshot(json_post(
                "/login",
                serde_json::json!({"email": "a@x.com", "password": "wrong"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_add_points_increments_by_ten() {
        let app = app();
        let signup = app
            .router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();
        let cookie = session_cookie(&signup);

        let response = app
            .router
            .clone()
            .oneshot(
                Request::post("/add-points")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["ecopoints"], 10);

        // Session copy was refreshed too.
        let me = app
            .router
            .oneshot(
                Request::get("/me")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(me).await["user"]["ecopoints"], 10);
    }

    #[tokio::test]
    async fn test_add_points_without_session_is_401() {
        let app = app();
        let response = app
            .router
            .oneshot(Request::post("/add-points").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Not logged in");
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let app = app();
        let signup = app
            .router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();
        let cookie = session_cookie(&signup);

        let logout = app
            .router
            .clone()
            .oneshot(
                Request::post("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(logout.status(), StatusCode::OK);
        assert_eq!(body_json(logout).await["success"], true);

        // The old token no longer resolves.
        let response = app
            .router
            .oneshot(
                Request::post("/add-points")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_converse_returns_assistant_reply() {
        let app = app_with(Ok("Composting is great!"));
        let response = app
            .router
            .oneshot(json_post(
                "/converse",
                serde_json::json!({"message": "tell me about composting"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Composting is great!");
    }

    #[tokio::test]
    async fn test_converse_gateway_failure_is_500() {
        let app = app_with(Err(()));
        let response = app
            .router
            .oneshot(json_post("/converse", serde_json::json!({"message": "hi"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Gemini request failed");
    }

    fn multipart_image(boundary: &str) -> Body {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"image\"; filename=\"item.jpg\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(&[0xff, 0xd8, 0xff, 0xe0]);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Body::from(body)
    }

    #[tokio::test]
    async fn test_classify_without_session_awards_nothing() {
        let app = app_with(Ok("Recyclable"));
        let boundary = "test-boundary";
        let response = app
            .router
            .oneshot(
                Request::post("/classify")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(multipart_image(boundary))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Recyclable");
        assert_eq!(json["ecopoints"], 0);
    }

    #[tokio::test]
    async fn test_classify_with_session_awards_ten() {
        let app = app_with(Ok("Biodegradable"));
        let signup = app
            .router
            .clone()
            .oneshot(json_post("/signup", signup_body()))
            .await
            .unwrap();
        let cookie = session_cookie(&signup);

        let boundary = "test-boundary";
        let response = app
            .router
            .oneshot(
                Request::post("/classify")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .header(header::COOKIE, &cookie)
                    .body(multipart_image(boundary))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Biodegradable");
        assert_eq!(json["ecopoints"], 10);
    }

    #[tokio::test]
    async fn test_classify_gateway_failure_is_500() {
        let app = app_with(Err(()));
        let boundary = "test-boundary";
        let response = app
            .router
            .oneshot(
                Request::post("/classify")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(multipart_image(boundary))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Image classification failed"
        );
    }

    #[tokio::test]
    async fn test_classify_without_file_is_400() {
        let app = app();
        let boundary = "test-boundary";
        let empty_form = format!("--{boundary}--\r\n");
        let response = app
            .router
            .oneshot(
                Request::post("/classify")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(empty_form))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No image uploaded");
    }

    #[tokio::test]
    async fn test_me_without_session_is_null() {
        let app = app();
        let response = app
            .router
            .oneshot(Request::get("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["user"].is_null());
    }
}
