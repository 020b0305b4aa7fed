use actix_web::{web, HttpResponse, Responder};
use common::config::SiteConfig;

/// Actix web handler for `GET /api/config`.
pub async fn process(config: web::Data<SiteConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use common::config::WebhookUrls;

    use crate::services::site_config::configure_routes;

    #[actix_web::test]
    async fn returns_the_shared_config_as_camel_case_json() {
        let config = SiteConfig {
            webhooks: WebhookUrls {
                contact_form: Some("https://hook.test/contact".into()),
                ..WebhookUrls::default()
            },
            ..SiteConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["webhooks"]["contactForm"], "https://hook.test/contact");
        assert!(body["webhooks"]["chatBot"].is_null());
        assert_eq!(body["whatsappNumber"], "972555081977");
        assert_eq!(body["calcomUsername"], "royrai");
    }

    #[actix_web::test]
    async fn round_trips_into_the_frontend_type() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SiteConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let config: SiteConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(config, SiteConfig::default());
    }
}
