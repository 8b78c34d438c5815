use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use skyegypt::{
    model::{inventory::RecordFormDto, resource::Resource},
    server::{
        controller::inventory::{create_record, delete_record, list_records, update_record},
        model::session::auth::SessionAuthToken,
    },
};

use super::*;

fn hotel_form() -> RecordFormDto {
    RecordFormDto::empty(Resource::Hotels)
        .with("name", Some("Steigenberger ALDAU"))
        .with("description", Some("Beachfront resort"))
        .with("price", Some("2400"))
        .with("city", Some("Hurghada"))
}

fn bearer() -> String {
    format!("Bearer {}", TEST_AUTH_TOKEN)
}

mod list_records {
    use super::*;

    #[tokio::test]
    /// Expect the envelope to be unwrapped into a flat record list
    async fn returns_normalized_records() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_list_endpoint("/hotels", factory::hotels_payload(3), 1)
            .build()
            .await?;
        log_in(&test).await;

        let result = list_records(
            State(app_state(&test)),
            test.session.clone(),
            Path("hotels".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["resource"], "hotels");
        assert_eq!(body["records"].as_array().unwrap().len(), 3);
        assert_eq!(body["records"][0]["name"], "Hotel 1");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without a backend call when nobody is logged in
    async fn requires_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_list_endpoint("/hotels", factory::hotels_payload(1), 0)
            .build()
            .await?;

        let result = list_records(
            State(app_state(&test)),
            test.session.clone(),
            Path("hotels".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a rejected token to log the admin out
    async fn clears_session_when_token_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/seatrips")
                    .with_status(401)
                    .with_body(r#"{"message":"Unauthenticated."}"#)
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = list_records(
            State(app_state(&test)),
            test.session.clone(),
            Path("seatrips".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let token = SessionAuthToken::get(&test.session).await.unwrap();
        assert!(token.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a collection the backend does not have
    async fn rejects_unknown_resource() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        log_in(&test).await;

        let result = list_records(
            State(app_state(&test)),
            test.session.clone(),
            Path("cruises".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Unknown resource: cruises" })
        );

        Ok(())
    }
}

mod create_record {
    use super::*;

    #[tokio::test]
    /// Expect a multipart POST to the collection and 201 with the backend's body
    async fn posts_multipart_form() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/hotels")
                    .match_header("authorization", bearer().as_str())
                    .match_header(
                        "content-type",
                        mockito::Matcher::Regex("^multipart/form-data".to_string()),
                    )
                    .match_body(mockito::Matcher::Regex("Steigenberger ALDAU".to_string()))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"_id":"42","name":"Steigenberger ALDAU"}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = create_record(
            State(app_state(&test)),
            test.session.clone(),
            Path("hotels".to_string()),
            Json(hotel_form()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await["_id"], "42");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 without a backend call when a required field is blank
    async fn rejects_missing_required_field() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("POST", "/hotels").expect(0).create())
            .build()
            .await?;
        log_in(&test).await;

        let form = hotel_form().with("name", Some(""));

        let result = create_record(
            State(app_state(&test)),
            test.session.clone(),
            Path("hotels".to_string()),
            Json(form),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await, json!({ "error": "Name is required" }));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect the backend's validation status and body to reach the admin
    async fn surfaces_backend_validation_error() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/hotels")
                    .with_status(422)
                    .with_body("The image field must be a file.")
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = create_record(
            State(app_state(&test)),
            test.session.clone(),
            Path("hotels".to_string()),
            Json(hotel_form()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "The image field must be a file." })
        );

        Ok(())
    }
}

mod update_record {
    use super::*;

    #[tokio::test]
    /// Expect the update to be posted to the record's own path
    async fn posts_to_record_path() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/hotels/7")
                    .match_header("authorization", bearer().as_str())
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"message":"Hotel updated"}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = update_record(
            State(app_state(&test)),
            test.session.clone(),
            Path(("hotels".to_string(), "7".to_string())),
            Json(hotel_form()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["message"], "Hotel updated");
        test.assert_mocks();

        Ok(())
    }
}

mod delete_record {
    use super::*;

    #[tokio::test]
    /// Expect 204 after the backend deletes the record
    async fn deletes_record() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("DELETE", "/safaris/3")
                    .match_header("authorization", bearer().as_str())
                    .with_status(200)
                    .with_body(r#"{"message":"Deleted"}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = delete_record(
            State(app_state(&test)),
            test.session.clone(),
            Path(("safaris".to_string(), "3".to_string())),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 without a backend call for an id that would resolve to the collection's parent
    async fn rejects_dot_segment_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("DELETE", mockito::Matcher::Any)
                    .expect(0)
                    .create()
            })
            .build()
            .await?;
        log_in(&test).await;

        let result = delete_record(
            State(app_state(&test)),
            test.session.clone(),
            Path(("hotels".to_string(), "..".to_string())),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test.assert_mocks();

        Ok(())
    }
}
