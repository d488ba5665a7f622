use std::net::SocketAddr;

use clap::{Args, Parser};
use derivative::Derivative;
use sqlx::mysql::MySqlConnectOptions;

use crate::error::ErrorVerbosity;

#[derive(Parser, Derivative)]
#[derivative(Debug)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Address the HTTP listener binds to.
    #[clap(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:9091")]
    pub listen_address: SocketAddr,

    /// How much detail error responses carry.
    #[clap(long, env = "ERROR_VERBOSITY", value_enum, default_value = "full")]
    pub error_verbosity: ErrorVerbosity,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Args, Derivative)]
#[derivative(Debug)]
pub struct DatabaseArgs {
    /// MySQL host.
    #[clap(long, env = "MYSQL_ADDR", default_value = "127.0.0.1")]
    pub mysql_addr: String,

    #[clap(long, env = "MYSQL_PORT", default_value_t = 3306)]
    pub mysql_port: u16,

    #[clap(long, env = "MYSQL_DATABASE")]
    pub mysql_database: String,

    #[clap(long, env = "MYSQL_USER")]
    pub mysql_user: String,

    #[derivative(Debug(format_with = "mask_fmt"))]
    #[clap(long, env = "MYSQL_PASSWORD", default_value = "", hide_env_values = true)]
    pub mysql_password: String,

    /// Upper bound of pooled connections shared by all requests.
    #[clap(long, env = "MYSQL_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

/// Formats every T as `...`
fn mask_fmt<T>(_: &T, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str("...")
}

impl DatabaseArgs {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.mysql_addr)
            .port(self.mysql_port)
            .database(&self.mysql_database)
            .username(&self.mysql_user)
            .password(&self.mysql_password)
    }
}
