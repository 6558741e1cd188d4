use actix_web::{web, HttpResponse};
use crate::{api::Repository, services::auth_service, utils::AppError};
use crate::services::auth_service::{LoginRequest, LoginResponse, MessageResponse, UnauthorizedResponse};

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User found", body = LoginResponse),
        (status = 400, description = "Mobile number missing or not a string", body = MessageResponse),
        (status = 401, description = "No user with this mobile number", body = UnauthorizedResponse),
        (status = 500, description = "Database unavailable or query failed", body = MessageResponse)
    )
)]
pub async fn login(
    repo: Repository,
    body: Option<web::Json<serde_json::Value>>,
) -> HttpResponse {
    // An unreadable body counts as a missing mobile number
    let request = body
        .map(|body| LoginRequest::from_body(body.into_inner()))
        .unwrap_or_default();
    log::info!("🔐 POST /login");

    match auth_service::login(repo.get_ref(), &request).await {
        Ok(user) => {
            log::info!("✅ Login successful: user {}", user.id);
            HttpResponse::Ok().json(LoginResponse { success: true, user })
        }
        Err(AppError::Validation) => HttpResponse::BadRequest().json(MessageResponse {
            message: AppError::Validation.to_string(),
        }),
        Err(AppError::Unauthorized) => {
            log::warn!("❌ Login failed: unknown mobile number");
            HttpResponse::Unauthorized().json(UnauthorizedResponse {
                success: false,
                message: AppError::Unauthorized.to_string(),
            })
        }
        Err(e) => {
            log::error!("❌ DB error: {}", e);
            HttpResponse::InternalServerError().json(MessageResponse {
                message: "Internal server error".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::UserRepository;
    use crate::services::auth_service::tests::{alice, InMemoryUsers, UnreachableDatabase};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn post_login(repo: Arc<dyn UserRepository>, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/login").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_empty_body_is_bad_request() {
        let (status, body) = post_login(Arc::new(InMemoryUsers(vec![alice()])), json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Mobile number required"}));
    }

    #[actix_web::test]
    async fn test_validation_does_not_touch_database() {
        let (status, _) = post_login(Arc::new(UnreachableDatabase), json!({"mobile": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_mobile_is_unauthorized() {
        let (status, body) =
            post_login(Arc::new(InMemoryUsers(vec![alice()])), json!({"mobile": "9999999999"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"success": false, "message": "Unauthorized"}));
    }

    #[actix_web::test]
    async fn test_known_mobile_returns_user() {
        let (status, body) =
            post_login(Arc::new(InMemoryUsers(vec![alice()])), json!({"mobile": "1234567890"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "user": {"id": 1, "mobile": "1234567890", "name": "Alice"}})
        );
    }

    #[actix_web::test]
    async fn test_database_failure_is_internal_error() {
        let (status, body) =
            post_login(Arc::new(UnreachableDatabase), json!({"mobile": "1234567890"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Internal server error"}));
    }

    #[actix_web::test]
    async fn test_non_json_body_is_bad_request() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUsers(vec![alice()]));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "text/plain"))
            .set_payload("mobile=1234567890")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_array_body_is_bad_request() {
        let (status, body) =
            post_login(Arc::new(InMemoryUsers(vec![alice()])), json!(["1234567890"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Mobile number required"}));
    }

    #[actix_web::test]
    async fn test_scalar_json_bodies_are_bad_request() {
        for payload in [json!("1234567890"), json!(1234567890), Value::Null] {
            let (status, body) = post_login(Arc::new(InMemoryUsers(vec![alice()])), payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"message": "Mobile number required"}));
        }
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUsers(vec![]));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
