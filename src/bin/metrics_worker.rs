use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use std::time::Duration;
use taskboard_backend::config::Config;
use taskboard_backend::db::DbPool;
use taskboard_backend::db::repositories::boards::BoardRepo;
use taskboard_backend::services::AnalyticsService;
use taskboard_backend::{config, init_tracing};

/// Refreshes every board's daily metric snapshot on a fixed interval.
/// The HTTP service exposes the same refresh as a manual endpoint.
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
        .max_size(2)
        .connection_timeout(Duration::from_secs(database.connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    let analytics = AnalyticsService::new(config.analytics().into());
    let refresh_interval_secs = config.metrics_worker().refresh_interval_secs;
    let mut interval = tokio::time::interval(Duration::from_secs(refresh_interval_secs));

    tracing::info!(interval_secs = refresh_interval_secs, "Metrics worker started");

    loop {
        interval.tick().await;
        refresh_all_boards(&db, &analytics);
    }
}

/// One sweep over every board. Failures are logged per board so a single
/// broken board cannot stall the rest of the sweep.
fn refresh_all_boards(db: &DbPool, analytics: &AnalyticsService) {
    let mut conn = match db.get() {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!(error = %err, "Failed to get connection from pool");
            return;
        }
    };

    let boards = match BoardRepo::list_all(&mut conn) {
        Ok(boards) => boards,
        Err(err) => {
            tracing::error!(error = %err, "Failed to list boards");
            return;
        }
    };

    let mut refreshed = 0usize;
    for board in &boards {
        match analytics.update_board_metrics(&mut conn, board.id) {
            Ok(_) => refreshed += 1,
            Err(err) => {
                tracing::warn!(board_id = %board.id, error = %err, "Metric snapshot failed");
            }
        }
    }

    tracing::info!(refreshed, total = boards.len(), "Metric snapshots refreshed");
}
