use std::net::SocketAddr;

use astra::Server;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, AppContext};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod media;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // Replace the seeded admin password when one is configured.
    if let Some(password) = config.admin_password.clone() {
        if let Err(e) = db.with_conn(move |conn| crate::auth::set_admin_password(conn, &password)) {
            tracing::error!(error = %e, "setting admin password failed");
            std::process::exit(1);
        }
    }

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, db = %config.db_path, "starting vitrine");

    let server = Server::bind(addr).max_workers(8);
    let ctx = AppContext { db, config };

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }
}
