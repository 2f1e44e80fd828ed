use actix_web::web;

use crate::handlers::locations;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations")
            .route("", web::post().to(locations::create_location))
            .route("/{id}", web::get().to(locations::get_location))
            .route("/{id}", web::put().to(locations::update_location))
            .route("/{id}", web::delete().to(locations::delete_location)),
    );
}
