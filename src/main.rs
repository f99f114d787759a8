//! Server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campuscode::{
    config::CONFIG,
    db, handlers,
    judge::{JudgeClient, PistonClient},
    middleware::{logging_middleware, rate_limit_middleware},
    state::AppState,
};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .nest("/api/v1", handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting CampusCode server");

    let db_pool = db::create_pool(&CONFIG.database).await?;
    db::test_connection(&db_pool).await?;
    tracing::info!("Database pool ready");

    db::run_migrations(&db_pool).await?;
    tracing::info!("Migrations applied");

    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;
    let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;
    tracing::info!("Redis connection established");

    // The judge is only reached when a submission comes in, so startup
    // does not probe it.
    let judge: Arc<dyn JudgeClient> = Arc::new(PistonClient::new(&CONFIG.judge)?);
    tracing::info!(url = %CONFIG.judge.url, "Judge client configured");

    let state = AppState::new(db_pool, redis_conn, judge, CONFIG.clone());
    let app = build_app(state);

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{addr}");

    // The rate limiter keys on the client address, which only exists
    // when the connect info is threaded through here.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
