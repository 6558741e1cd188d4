pub mod health;
pub mod auth;
pub mod swagger;

use crate::database::UserRepository;
use actix_web::web;

/// Shared handle to the user store, injected into handlers
pub type Repository = web::Data<dyn UserRepository>;

/// Registers every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/login", web::post().to(auth::login));
}
