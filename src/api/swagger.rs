use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mobile Login Service API",
        version = "1.0.0",
        description = "Looks up users by mobile number. There is no password or token handling: a login succeeds when a user with the given mobile number exists."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::auth::login,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::User,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::services::auth_service::UnauthorizedResponse,
            crate::services::auth_service::MessageResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Mobile number lookup."),
        (name = "Health", description = "Liveness check."),
    )
)]
pub struct ApiDoc;
