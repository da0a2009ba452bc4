pub mod test_helpers {
    use crate::{models::User, router::build_router, store::create_store, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    /// Create application state over a fresh, empty store
    pub fn create_test_state() -> AppState {
        AppState::new(create_store())
    }

    /// Router plus the state behind it, so tests can seed data directly
    pub fn create_test_app() -> (Router, AppState) {
        let state = create_test_state();
        (build_router(state.clone()), state)
    }

    /// Insert a test user through the service layer
    pub async fn insert_test_user(state: &AppState, name: &str, username: &str) -> User {
        state
            .user_service
            .create_user(crate::models::CreateUserRequest {
                name: name.to_string(),
                username: username.to_string(),
            })
            .await
            .expect("Failed to create test user")
    }

    /// Build a request with an optional `username` header and JSON body
    pub fn json_request(
        method: &str,
        uri: &str,
        username: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(username) = username {
            builder = builder.header(crate::middleware::USERNAME_HEADER, username);
        }

        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        }
    }

    /// Send one request through the router and decode the JSON reply
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an error");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, body)
    }
}
