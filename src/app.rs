use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, HttpServer, web};

use crate::config::ConfigLoader;
use crate::{handlers, service};

pub fn create_app(
    relay_service: Arc<service::RelayService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(relay_service))
        .route("/", web::get().to(handlers::liveness))
        .route("/ask_gemini", web::post().to(handlers::ask_gemini))
        .default_service(web::to(handlers::not_found))
}

/// Loads the configuration and binds the listener. A missing credential fails here,
/// before any socket is opened.
pub fn run(loader: &dyn ConfigLoader) -> std::io::Result<Server> {
    let config = loader.load_config()?;
    log::info!("Loaded configuration: {:?}", config);

    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let relay_service = Arc::new(service::RelayService::new(http_client, &config));

    let server = HttpServer::new(move || create_app(relay_service.clone()))
        .bind((config.host.as_str(), config.port))?
        .run();

    log::info!("Listening on {}:{}", config.host, config.port);

    Ok(server)
}
