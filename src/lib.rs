pub mod cli_args;
pub mod envelope;
pub mod error;
mod extractor;
mod middleware;
pub mod model;
mod route;
pub mod server;
mod state;
pub mod store;
