use anyhow::Context;
use book_service::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
    store::mysql::MySqlBookStore,
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var(
            "RUST_LOG",
            "server=trace,book_service=trace,tower_http=trace,sqlx=warn",
        );
    }

    init_tracing()?;

    let args = CliArgs::parse();

    tracing::info!(?args, "Starting ...");

    let store = MySqlBookStore::connect(
        args.database.connect_options(),
        args.database.max_connections,
    )
    .await
    .context("Database is not reachable")?;

    store
        .ensure_schema()
        .await
        .context("Failed to create the book table")?;

    let server_config = ServerConfig::new(args.listen_address, args.error_verbosity);
    let server = Server::new(server_config, store.clone());

    server.run().await?;

    store.close().await;

    Ok(())
}
