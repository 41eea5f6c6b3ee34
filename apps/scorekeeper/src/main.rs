use actix_web::{web, App, HttpServer};
use scorekeeper::config::AppConfig;
use scorekeeper::middleware::cors::cors_middleware;
use scorekeeper::middleware::request_trace::RequestTrace;
use scorekeeper::routes;
use scorekeeper::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🀄 Starting scorekeeper on http://{}:{}",
        config.host, config.port
    );

    let app_state = AppState::from_config(&config);
    println!(
        "✅ Storage: {}",
        config.data_dir.join(format!("{}.json", config.session_key)).display()
    );

    let data = web::Data::new(app_state);
    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
