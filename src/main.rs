use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use geoloc::database::init_database;
use geoloc::middleware::RequestId;
use geoloc::routes;
use geoloc::{Config, GoogleGeocoder, LocationRepository, LocationService};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("Starting geoloc API server...");

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );
    if config.is_development() {
        log::debug!(
            "Geocoder endpoint {} with {}s timeout",
            config.geocoder_url,
            config.geocoder_timeout_secs
        );
    }

    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    let geocoder = GoogleGeocoder::new(
        config.geocoder_url.clone(),
        config.geocoder_api_key.clone(),
        config.geocoder_timeout(),
    )?;
    if config.is_production() && config.geocoder_api_key.is_none() {
        log::warn!("GEOCODER_API_KEY is not set; the provider will likely reject requests");
    }

    let location_service = web::Data::new(LocationService::new(
        Arc::new(geocoder),
        Arc::new(LocationRepository::new(pool)),
    ));

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    let cors_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(location_service.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Accept", "X-Correlation-ID"])
                    .expose_headers(vec!["X-Correlation-ID"])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b %T correlation_id=%{x-correlation-id}o"#,
            ))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
