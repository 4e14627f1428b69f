use crate::api::shared::ExampleResponse;
use crate::services::clock::Clock;
use actix_web::{web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/example").route(web::get().to(example)));
}

/// Connectivity probe the scaffold frontends call on their home page. The
/// request itself is ignored; the body is a fixed greeting plus the current
/// time from the injected clock.
async fn example(clock: web::Data<dyn Clock>) -> HttpResponse {
    HttpResponse::Ok().json(ExampleResponse::new(clock.now()))
}
