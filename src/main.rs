use gemini_relay::app;
use gemini_relay::config::EnvConfigLoader;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Gemini relay service...");

    let server = match app::run(&EnvConfigLoader::new()) {
        Ok(server) => server,
        Err(e) => {
            log::error!("startup failed: {}", e);
            return Err(e);
        }
    };

    server.await
}
