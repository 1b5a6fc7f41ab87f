use axum::Server;
use axum::http::HeaderValue;
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use taskboard_backend::config::Config;
use taskboard_backend::db::DbPool;
use taskboard_backend::{AppState, config, init_tracing, middleware, routes};
use tower_http::cors::{Any, AllowOrigin, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    init_tracing(&config);
    config::set_error_detail_exposure(!config.is_production());

    let database = config.database();
    let manager = DbConnectionManager::<PgConnection>::new(&database.url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(database.max_connections)
        .min_idle(Some(database.min_connections))
        .connection_timeout(Duration::from_secs(database.connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    let cors = build_cors(&config);

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    let state = Arc::new(AppState::new(db, config));

    let app = routes::create_router(state)
        .layer(cors)
        .layer(axum::middleware::from_fn(
            middleware::request_tracking_middleware,
        ));

    tracing::info!(address = %addr, "Server listening");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}

fn build_cors(config: &Config) -> CorsLayer {
    let server = config.server();
    if server.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
