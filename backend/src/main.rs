//! Service entry point: configuration, logging, schema, pool, HTTP server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::{env, fmt};

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use roster_backend::ApiDoc;
use roster_backend::inbound::http::greetings::{hello, home};
use roster_backend::inbound::http::health::{HealthState, live, ready};
use roster_backend::inbound::http::search::search;
use roster_backend::inbound::http::state::HttpState;
use roster_backend::inbound::http::users::{create_user, read_user};
use roster_backend::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_migrations,
};

fn other_error(err: impl fmt::Display) -> io::Error {
    io::Error::other(err.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url =
        env::var("DATABASE_URL").map_err(|_| other_error("DATABASE_URL must be set"))?;
    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
        .parse()
        .map_err(|e| other_error(format!("invalid BIND_ADDR: {e}")))?;

    run_migrations(&database_url).map_err(other_error)?;

    let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .await
        .map_err(other_error)?;
    let state = HttpState::new(Arc::new(DieselUserRepository::new(pool)));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .service(home)
            .service(hello)
            .service(search)
            .service(create_user)
            .service(read_user)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(bind_addr)?;

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    server.run().await
}
