use actix_web::{HttpRequest, HttpResponse, Result, web};

use crate::{
    database::models::LocationInput, middleware::RequestIdExt, services::LocationService,
};

fn correlation_id(req: &HttpRequest) -> String {
    req.correlation_id().unwrap_or_else(|| "-".to_string())
}

pub async fn get_location(
    req: HttpRequest,
    path: web::Path<String>,
    service: web::Data<LocationService>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    log::debug!(
        "Fetching location {} (correlation_id={})",
        location_id,
        correlation_id(&req)
    );

    let location = service.read(&location_id).await?;

    Ok(HttpResponse::Ok().json(location))
}

pub async fn create_location(
    req: HttpRequest,
    input: web::Json<LocationInput>,
    service: web::Data<LocationService>,
) -> Result<HttpResponse> {
    log::debug!("Creating location (correlation_id={})", correlation_id(&req));

    let location = service.create(input.into_inner()).await?;

    Ok(HttpResponse::Created().json(location))
}

// Updates answer 201 like creates do; existing clients depend on it.
pub async fn update_location(
    req: HttpRequest,
    path: web::Path<String>,
    input: web::Json<LocationInput>,
    service: web::Data<LocationService>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    log::debug!(
        "Updating location {} (correlation_id={})",
        location_id,
        correlation_id(&req)
    );

    let location = service.update(&location_id, input.into_inner()).await?;

    Ok(HttpResponse::Created().json(location))
}

pub async fn delete_location(
    req: HttpRequest,
    path: web::Path<String>,
    service: web::Data<LocationService>,
) -> Result<HttpResponse> {
    let location_id = path.into_inner();
    log::debug!(
        "Deleting location {} (correlation_id={})",
        location_id,
        correlation_id(&req)
    );

    service.delete(&location_id).await?;

    Ok(HttpResponse::Ok().finish())
}
