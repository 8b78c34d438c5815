use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use skyegypt::{
    model::api::LoginDto,
    server::{
        controller::auth::{get_session, login, logout},
        model::session::auth::SessionAuthToken,
    },
};

use super::*;

fn credentials() -> LoginDto {
    LoginDto {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

mod login {
    use super::*;

    #[tokio::test]
    /// Expect the backend token to be stored in the session after a successful login
    async fn stores_backend_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint(200, json!({ "token": TEST_AUTH_TOKEN }))
            .build()
            .await?;

        let result = login(
            State(app_state(&test)),
            test.session.clone(),
            Json(credentials()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "authenticated": true }));

        let token = SessionAuthToken::get(&test.session).await.unwrap();
        assert_eq!(token.as_deref(), Some(TEST_AUTH_TOKEN));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 carrying the backend's message when the credentials are rejected
    async fn surfaces_backend_rejection() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint(401, json!({ "message": "Invalid credentials" }))
            .build()
            .await?;

        let result = login(
            State(app_state(&test)),
            test.session.clone(),
            Json(credentials()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Invalid credentials" })
        );

        let token = SessionAuthToken::get(&test.session).await.unwrap();
        assert!(token.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 without contacting the backend when the password is blank
    async fn rejects_blank_password() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = login(
            State(app_state(&test)),
            test.session.clone(),
            Json(LoginDto {
                username: TEST_USERNAME.to_string(),
                password: "  ".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Password is required" })
        );

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect 307 to the login screen and the token cleared from the session
    async fn clears_token_and_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        log_in(&test).await;

        let result = logout(test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/admin/login");

        let token = SessionAuthToken::get(&test.session).await.unwrap();
        assert!(token.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 307 even when nobody was logged in
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        Ok(())
    }
}

mod get_session {
    use super::*;

    #[tokio::test]
    /// Expect the session state to follow the stored token
    async fn reports_login_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = get_session(test.session.clone())
            .await
            .unwrap()
            .into_response();
        assert_eq!(body_json(resp).await, json!({ "authenticated": false }));

        log_in(&test).await;

        let resp = get_session(test.session.clone())
            .await
            .unwrap()
            .into_response();
        assert_eq!(body_json(resp).await, json!({ "authenticated": true }));

        Ok(())
    }
}
