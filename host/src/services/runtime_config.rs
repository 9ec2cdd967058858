//! Runtime configuration handed to the front-end on start-up.

use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource};
use common::model::config::AppConfig;

/// Path the front-end fetches before it talks to the backend.
const CONFIG_PATH: &str = "/config.json";

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn serves_configured_backend_url() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppConfig::new("https://api.school.test/")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let body: AppConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, AppConfig::new("https://api.school.test"));
        assert_eq!(body.endpoint("form/count"), "https://api.school.test/form/count");
    }

    #[actix_web::test]
    async fn body_is_a_flat_backend_url_document() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppConfig::new("http://localhost:4000")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, serde_json::json!({ "backend_url": "http://localhost:4000" }));
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppConfig::new("http://localhost:4000")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/config.json").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::METHOD_NOT_ALLOWED);
    }
}
