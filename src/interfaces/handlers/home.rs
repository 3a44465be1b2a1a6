use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Job experience form service",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "form": "/api/v1/experience/form",
        "validate": "/api/v1/experience/validate"
    }))
}
