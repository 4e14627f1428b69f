// src/api/mod.rs
pub mod example;
pub mod health;
pub mod shared;

use actix_web::web;

// Routes the scaffold's frontends expect: the example endpoint under /api,
// the health tree at the root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    cfg.service(web::scope("/api").configure(example::configure));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::{Clock, SystemClock};
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn wires_example_and_health_routes() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(clock))
                .app_data(web::Data::new(health::StartTime::default()))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/example").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Hello from go-echo backend!");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "UP");
    }
}
