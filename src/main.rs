use clap::Parser;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod map;
mod sessions;
mod storage;

use crate::cli::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    map::init(&args);
    let app_context = app_context::init();
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
