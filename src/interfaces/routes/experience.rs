use actix_web::web;

use crate::handlers::experience;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experience")
            .service(
                web::resource("/form")
                    .route(web::get().to(experience::get_form))
            )
            .service(
                web::resource("/validate")
                    .route(web::post().to(experience::validate_experience))
            )
    );
}
