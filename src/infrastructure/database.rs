use crate::config::BackendConfig;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::str::FromStr;

/// The endpoint URL carries host and database; the service key is the password.
pub fn connect_options(config: &BackendConfig) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(config.url())?.password(config.service_key()))
}

pub async fn init_pool(config: &BackendConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .connect_with(connect_options(config)?)
        .await
}

/// Single-connection pool that does not dial until first use, so the caller's
/// first query doubles as the connectivity check.
pub fn lazy_single_connection(config: &BackendConfig) -> Result<PgPool, sqlx::Error> {
    Ok(PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(connect_options(config)?))
}
