mod assets;
mod config;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    info!("Config: {}", config.summary());

    let site = web::Data::new(config.site.clone());
    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(site.clone())
            .service(services::site_config::configure_routes())
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
