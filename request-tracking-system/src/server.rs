use std::sync::Arc;

use actix_web::http::{header, Method};
use actix_web::middleware::DefaultHeaders;
use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::config::{build_config, RtsConfig};
use crate::infrastructure::telemetry::initialize_telemetry;
use crate::infrastructure::ServiceProvider;

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build runtime".red(), e);
        }
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config().and_then(|c| Ok(c.try_deserialize::<RtsConfig>()?)) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(&config.common.telemetry) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {:#}", "Cannot build Service Provider".red(), e);
        }
    };
    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().common.host.clone();
    let server = actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors_headers())
            .app_data(web::Data::from(sp.clone()))
            .configure(routes)
    })
    .bind((host.bind_address.to_owned(), host.bind_port));
    let server = match server {
        Ok(x) => x,
        Err(e) => {
            return error!("Cannot bind {}:{}: {}", host.bind_address, host.bind_port, e);
        }
    };
    info!("Listening on {}:{}.", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}

/// Cross origin headers sent on every response: any origin, the common methods and a
/// `Content-Type`/`Authorization` allowlist.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(api::json_error_handler))
        .service(
            web::scope("/api")
                .service(api::request::list)
                .service(api::request::create)
                .service(api::request::stats)
                .service(api::request::update_status)
                .route("/{tail:.*}", web::method(Method::OPTIONS).to(api::preflight)),
        );
}
