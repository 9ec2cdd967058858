mod config;
mod services;

use crate::config::HostConfig;
use crate::services::assets::{serve_embedded, Assets};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env()?;
    let url = config.url();

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("front-end build not embedded, run `trunk build` in frontend/ and rebuild the host");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open browser: {}", err);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Backend API at {}", config.app.backend_url);

    let app_config = web::Data::new(config.app.clone());
    let assets = web::Data::new(Assets(&STATIC_DIR));

    HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .app_data(assets.clone())
            .service(services::runtime_config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
