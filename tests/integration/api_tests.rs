//! HTTP API tests
//!
//! Drive the assembled application through `actix_web::test`.

#[cfg(test)]
mod tests {
    use crate::common::{API, PASSWORD, UserFactory, test_config, test_state, test_state_with, with_token};
    use crate::{call_json, signup};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use itemvault::auth::JwtHandler;
    use itemvault::config::FirstSuperuserConfig;
    use itemvault::server::HttpServer;
    use serde_json::json;

    fn config_with_admin() -> itemvault::Config {
        let mut config = test_config();
        config.app.auth.first_superuser = Some(FirstSuperuserConfig {
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            password: PASSWORD.to_string(),
        });
        config
    }

    fn uri(path: &str) -> String {
        format!("{}{}", API, path)
    }

    #[actix_web::test]
    async fn test_example_flow() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;

        let (status, alice) = call_json!(&app, UserFactory::register_request("alice"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(alice["is_superuser"], false);

        let (status, body) = call_json!(&app, UserFactory::register_request("alice"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "The user with this email already exists in the system."
        );

        let (status, body) = call_json!(&app, UserFactory::login_request("alice", "wrong"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Incorrect username or password");

        let (status, body) = call_json!(&app, UserFactory::login_request("alice", PASSWORD));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        let alice_token = body["access_token"].as_str().unwrap().to_string();
        assert!(!alice_token.is_empty());

        let (status, item) = call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/items/")), &alice_token)
                .set_json(json!({"title": "t"}))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["owner_id"], alice["id"]);
        assert_eq!(item["title"], "t");
        assert!(item["description"].is_null());

        let (_, bob_token) = signup!(&app, "bob");
        let item_uri = uri(&format!("/items/{}", item["id"]));
        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&item_uri), &bob_token)
        );
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["message"], "Not enough permissions");
    }

    #[actix_web::test]
    async fn test_register_response_shape() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;

        let (status, user) = call_json!(&app, UserFactory::register_request("carol"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["email"], "carol@example.com");
        assert_eq!(user["username"], "carol");
        assert_eq!(user["is_active"], true);
        assert!(user["id"].is_i64());
        assert!(user["created_at"].is_string());
        assert!(user.get("hashed_password").is_none());
        assert!(user.get("password").is_none());
    }

    #[actix_web::test]
    async fn test_register_duplicate_username() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        signup!(&app, "dave");

        let (status, body) = call_json!(
            &app,
            TestRequest::post().uri(&uri("/users/")).set_json(json!({
                "email": "other@example.com",
                "username": "dave",
                "password": PASSWORD,
            }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(body["error"]["message"], "The username is already taken.");
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_input() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;

        for payload in [
            json!({"email": "not-an-email", "username": "x", "password": PASSWORD}),
            json!({"email": "x@example.com", "username": "a@b", "password": PASSWORD}),
            json!({"email": "x@example.com", "username": "x", "password": ""}),
            json!({"email": "x@example.com", "password": PASSWORD}),
        ] {
            let (status, body) =
                call_json!(&app, TestRequest::post().uri(&uri("/users/")).set_json(payload));
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", body);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_by_email_and_unknown_user() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        signup!(&app, "erin");

        let (status, body) = call_json!(
            &app,
            UserFactory::login_request("erin@example.com", PASSWORD)
        );
        assert_eq!(status, StatusCode::OK);
        assert!(body["access_token"].is_string());

        let (unknown_status, unknown) =
            call_json!(&app, UserFactory::login_request("nobody", PASSWORD));
        let (wrong_status, wrong) =
            call_json!(&app, UserFactory::login_request("erin", "bad password"));
        assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
        assert_eq!(unknown_status, wrong_status);
        assert_eq!(unknown["error"]["code"], wrong["error"]["code"]);
        assert_eq!(unknown["error"]["message"], wrong["error"]["message"]);
    }

    #[actix_web::test]
    async fn test_inactive_user_cannot_login() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;

        let (status, user) = call_json!(
            &app,
            TestRequest::post().uri(&uri("/users/")).set_json(json!({
                "email": "frank@example.com",
                "username": "frank",
                "password": PASSWORD,
                "is_active": false,
            }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["is_active"], false);

        let (status, body) = call_json!(&app, UserFactory::login_request("frank", PASSWORD));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Inactive user");
    }

    #[actix_web::test]
    async fn test_token_required_and_validated() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;

        let (status, body) = call_json!(&app, TestRequest::get().uri(&uri("/users/me")));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "NOT_AUTHENTICATED");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/me")), "garbage")
        );
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Could not validate credentials");
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let config = test_config();
        let jwt = JwtHandler::new(&config.app.auth);
        let app = test::init_service(HttpServer::create_app(test_state_with(config).await)).await;
        let (user, _) = signup!(&app, "hana");

        let user_id = user["id"].as_i64().unwrap() as i32;
        let expired = jwt
            .create_access_token_with_ttl(user_id, chrono::Duration::seconds(-30))
            .unwrap();

        let resp = test::call_service(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/me")), &expired).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get("www-authenticate").unwrap(), "Bearer");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");
    }

    #[actix_web::test]
    async fn test_token_for_deleted_account_is_rejected() {
        let state = test_state().await;
        let token = state.auth.issue_token(9999).unwrap();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/")), &token)
        );
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_read_and_update_me() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        let (user, token) = signup!(&app, "gina");

        let (status, me) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/me")), &token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["id"], user["id"]);

        let (status, updated) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&uri("/users/me")), &token)
                .set_json(json!({"username": "gina2", "password": "a brand new password"}))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["username"], "gina2");
        assert_eq!(updated["email"], "gina@example.com");

        let (status, _) = call_json!(&app, UserFactory::login_request("gina2", PASSWORD));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = call_json!(
            &app,
            UserFactory::login_request("gina2", "a brand new password")
        );
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_update_me_conflicts() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        signup!(&app, "hank");
        let (_, token) = signup!(&app, "iris");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&uri("/users/me")), &token)
                .set_json(json!({"email": "hank@example.com"}))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Email already registered");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&uri("/users/me")), &token)
                .set_json(json!({"username": "hank"}))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Username already registered");

        // Re-submitting your own values is not a conflict
        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&uri("/users/me")), &token)
                .set_json(json!({"email": "iris@example.com", "username": "iris"}))
        );
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_read_user_by_id() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let (jack, jack_token) = signup!(&app, "jack");
        let (kate, _) = signup!(&app, "kate");
        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri(&format!("/users/{}", jack["id"]))), &jack_token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "jack");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri(&format!("/users/{}", kate["id"]))), &jack_token)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "The user doesn't have enough privileges");

        // Privilege is checked before existence
        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/424242")), &jack_token)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri(&format!("/users/{}", kate["id"]))), &admin_token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "kate");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/424242")), &admin_token)
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            "The user with this id does not exist in the system"
        );

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/not-a-number")), &admin_token)
        );
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_list_users_superuser_only() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let (_, liam_token) = signup!(&app, "liam");
        signup!(&app, "mona");
        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();

        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/")), &liam_token)
        );
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, users) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/")), &admin_token)
        );
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = users
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["username"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["admin", "liam", "mona"]);

        let (status, page) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/?skip=1&limit=1")), &admin_token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.as_array().unwrap().len(), 1);
        assert_eq!(page[0]["username"], "liam");

        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/users/?limit=-1")), &admin_token)
        );
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_superuser_registration_rules() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let payload = json!({
            "email": "root@example.com",
            "username": "root",
            "password": PASSWORD,
            "is_superuser": true,
        });

        let (status, body) = call_json!(
            &app,
            TestRequest::post().uri(&uri("/users/")).set_json(payload.clone())
        );
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            body["error"]["message"],
            "Not enough permissions to create a superuser"
        );

        let (_, ordinary_token) = signup!(&app, "nina");
        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/users/")), &ordinary_token)
                .set_json(payload.clone())
        );
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();
        let (status, root) = call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/users/")), &admin_token).set_json(payload)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(root["is_superuser"], true);
    }

    #[actix_web::test]
    async fn test_open_superuser_registration() {
        let mut config = test_config();
        config.app.auth.allow_open_superuser_registration = true;
        let app = test::init_service(HttpServer::create_app(test_state_with(config).await)).await;

        let (status, body) = call_json!(
            &app,
            TestRequest::post().uri(&uri("/users/")).set_json(json!({
                "email": "open@example.com",
                "username": "open",
                "password": PASSWORD,
                "is_superuser": true,
            }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_superuser"], true);
    }

    #[actix_web::test]
    async fn test_item_listing_is_scoped() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let (_, olga) = signup!(&app, "olga");
        let (_, pete) = signup!(&app, "pete");
        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();

        for (token, title) in [(&olga, "o1"), (&pete, "p1"), (&olga, "o2"), (&pete, "p2")] {
            let (status, _) = call_json!(
                &app,
                with_token(TestRequest::post().uri(&uri("/items/")), token)
                    .set_json(json!({"title": title, "description": "d"}))
            );
            assert_eq!(status, StatusCode::OK);
        }

        let titles = |body: &serde_json::Value| -> Vec<String> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|i| i["title"].as_str().unwrap().to_string())
                .collect()
        };

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/")), &olga)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["o1", "o2"]);

        let (_, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/?skip=1")), &pete)
        );
        assert_eq!(titles(&body), vec!["p2"]);

        let (_, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/")), &admin_token)
        );
        assert_eq!(titles(&body), vec!["o1", "p1", "o2", "p2"]);

        let (_, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/?skip=1&limit=2")), &admin_token)
        );
        assert_eq!(titles(&body), vec!["p1", "o2"]);
    }

    #[actix_web::test]
    async fn test_item_access_policy() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let (_, quinn) = signup!(&app, "quinn");
        let (_, rose) = signup!(&app, "rose");
        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();

        let (_, item) = call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/items/")), &quinn)
                .set_json(json!({"title": "mine"}))
        );
        let item_uri = uri(&format!("/items/{}", item["id"]));

        for request in [
            TestRequest::get().uri(&item_uri),
            TestRequest::put().uri(&item_uri).set_json(json!({"title": "stolen"})),
            TestRequest::delete().uri(&item_uri),
        ] {
            let (status, body) = call_json!(&app, with_token(request, &rose));
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["error"]["code"], "FORBIDDEN");
        }

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&item_uri), &admin_token)
                .set_json(json!({"description": "reviewed"}))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "mine");
        assert_eq!(body["description"], "reviewed");
        assert_eq!(body["owner_id"], item["owner_id"]);

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&item_uri), &admin_token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "reviewed");

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::delete().uri(&item_uri), &admin_token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], item["id"]);
        assert_eq!(body["owner_id"], item["owner_id"]);

        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&item_uri), &quinn)
        );
        assert_eq!(status, StatusCode::NOT_FOUND);

        for token in [&rose, &admin_token] {
            let (status, body) = call_json!(
                &app,
                with_token(TestRequest::get().uri(&uri("/items/999999")), token)
            );
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"]["message"], "Item not found");
        }
    }

    #[actix_web::test]
    async fn test_item_update_and_delete() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        let (_, token) = signup!(&app, "sara");

        let (_, item) = call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/items/")), &token)
                .set_json(json!({"title": "draft", "description": "first"}))
        );
        let item_uri = uri(&format!("/items/{}", item["id"]));

        let (status, updated) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&item_uri), &token)
                .set_json(json!({"title": "final"}))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "final");
        assert_eq!(updated["description"], "first");

        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::put().uri(&item_uri), &token).set_json(json!({"title": ""}))
        );
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, deleted) = call_json!(
            &app,
            with_token(TestRequest::delete().uri(&item_uri), &token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["id"], item["id"]);
        assert_eq!(deleted["title"], "final");

        let (status, _) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&item_uri), &token)
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_item_requires_title() {
        let app = test::init_service(HttpServer::create_app(test_state().await)).await;
        let (_, token) = signup!(&app, "tina");

        for payload in [json!({"title": "   "}), json!({"description": "no title"})] {
            let (status, body) = call_json!(
                &app,
                with_token(TestRequest::post().uri(&uri("/items/")), &token).set_json(payload)
            );
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_max_page_size_clamps_limit() {
        let mut config = test_config();
        config.app.server.max_page_size = Some(2);
        let app = test::init_service(HttpServer::create_app(test_state_with(config).await)).await;
        let (_, token) = signup!(&app, "uma");

        for title in ["a", "b", "c"] {
            call_json!(
                &app,
                with_token(TestRequest::post().uri(&uri("/items/")), &token)
                    .set_json(json!({"title": title}))
            );
        }

        let (status, body) = call_json!(
            &app,
            with_token(TestRequest::get().uri(&uri("/items/?limit=50")), &token)
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_list_endpoints_accept_huge_paging_values() {
        let app = test::init_service(HttpServer::create_app(test_state_with(config_with_admin()).await))
            .await;
        let (_, token) = signup!(&app, "vera");
        let (_, admin) = call_json!(&app, UserFactory::login_request("admin", PASSWORD));
        let admin_token = admin["access_token"].as_str().unwrap().to_string();

        call_json!(
            &app,
            with_token(TestRequest::post().uri(&uri("/items/")), &token)
                .set_json(json!({"title": "only"}))
        );

        let huge = "9223372036854775808";
        for (path, bearer) in [("/items/", &token), ("/users/", &admin_token)] {
            let (status, body) = call_json!(
                &app,
                with_token(TestRequest::get().uri(&uri(&format!("{}?limit={}", path, huge))), bearer)
            );
            assert_eq!(status, StatusCode::OK, "{}: {}", path, body);
            assert!(!body.as_array().unwrap().is_empty());

            let (status, body) = call_json!(
                &app,
                with_token(TestRequest::get().uri(&uri(&format!("{}?skip={}", path, huge))), bearer)
            );
            assert_eq!(status, StatusCode::OK, "{}: {}", path, body);
            assert!(body.as_array().unwrap().is_empty());
        }
    }
}
