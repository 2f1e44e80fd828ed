use actix_web::{HttpResponse, Responder, get, web};

use crate::error::AppError;

pub mod locations;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Geoloc API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(hello)
        .service(health)
        .configure(locations::configure);
}
