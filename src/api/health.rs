use crate::api::shared::{HealthResponse, ProbeResponse};
use crate::services::clock::Clock;
use actix_web::{web, HttpResponse};
use std::env;
use std::time::Instant;

/// Process start instant, captured once at startup for the uptime field.
pub struct StartTime(Instant);

impl Default for StartTime {
    fn default() -> Self {
        Self(Instant::now())
    }
}

impl StartTime {
    pub fn elapsed_secs(&self) -> u64 {
        self.0.elapsed().as_secs()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/live", web::get().to(live))
            .route("/ready", web::get().to(ready)),
    );
}

async fn health_check(
    clock: web::Data<dyn Clock>,
    started: web::Data<StartTime>,
) -> HttpResponse {
    let environment = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    HttpResponse::Ok().json(HealthResponse::up(
        clock.now(),
        started.elapsed_secs(),
        environment,
    ))
}

// Liveness probe (K8s compatible)
async fn live() -> HttpResponse {
    HttpResponse::Ok().json(ProbeResponse::up())
}

// Readiness probe (K8s compatible); nothing to check beyond the process
async fn ready() -> HttpResponse {
    HttpResponse::Ok().json(ProbeResponse::up())
}
