//! Common test utilities for itemvault-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestDatabase, UserFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let user = db.db().create_user(&UserFactory::new_user("alice")).await.unwrap();
//! }
//! ```

pub mod database;

// Re-export commonly used items
pub use app::{API, test_config, test_state, test_state_with};
pub use database::TestDatabase;
pub use fixtures::{ItemFactory, PASSWORD, UserFactory, with_token};

/// Call a test service and decode the JSON body
///
/// Evaluates to `(StatusCode, serde_json::Value)`.
#[macro_export]
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service($app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Register a user by label and log them in
///
/// Evaluates to `(user_json, access_token)`.
#[macro_export]
macro_rules! signup {
    ($app:expr, $label:expr) => {{
        let (status, user) =
            $crate::call_json!($app, $crate::common::UserFactory::register_request($label));
        assert_eq!(status, actix_web::http::StatusCode::OK, "register failed: {}", user);

        let (status, token) = $crate::call_json!(
            $app,
            $crate::common::UserFactory::login_request($label, $crate::common::PASSWORD)
        );
        assert_eq!(status, actix_web::http::StatusCode::OK, "login failed: {}", token);

        let token = token["access_token"].as_str().unwrap().to_string();
        (user, token)
    }};
}
