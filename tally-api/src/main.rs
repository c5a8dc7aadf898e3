use std::net::SocketAddr;
use tally_api::{app, state::AppState};
use tally_slip::SlipRenderer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = tally_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Tally API on port {}", config.server.port);

    let state = AppState {
        slip_order_path: config.data.slip_order_path.clone().into(),
        renderer: SlipRenderer::default(),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
