//! A local stand-in for the hosted mock API the expense tracker ships
//! against.

use std::net::SocketAddr;

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendtrack::{
    graceful_shutdown,
    mock_api::{DEMO_EMAIL, DEMO_PASSWORD, MockApiState, build_router},
};

/// A local mock of the remote expense service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the mock API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Start with an empty record set instead of the demo seed data.
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let state = if args.empty {
        MockApiState::new()
    } else {
        tracing::info!("Seeded demo user: {DEMO_EMAIL} / {DEMO_PASSWORD}");
        MockApiState::seeded()
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("Mock API listening on http://{addr}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the mock API server");
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http().make_span_with(|req: &Request| {
        let method = req.method();
        let uri = req.uri();

        let matched_path = req
            .extensions()
            .get::<MatchedPath>()
            .map(|matched_path| matched_path.as_str());

        tracing::info_span!("request", %method, %uri, matched_path)
    });

    router.layer(tracing_layer)
}
