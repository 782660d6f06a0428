use sea_orm::Database;
use tracing::info;

use inventory::config::InventoryConfig;
use inventory::infra::barcode::HttpBarcodeClient;
use inventory::infra::email::SmtpEmailSender;
use inventory::router::build_router;
use inventory::state::AppState;
use inventory_core::config::Config as _;
use inventory_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = InventoryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpEmailSender::new(config.smtp()).expect("failed to configure email");
    let barcode = HttpBarcodeClient::new(config.upc()).expect("failed to configure barcode client");
    if config.upc().is_none() {
        info!("UPC_URL/UPC_TOKEN not set, barcode lookup disabled");
    }

    let state = AppState {
        db,
        mailer,
        barcode,
    };

    let router = build_router(state, config.frontend_path.as_deref());
    let http_addr = format!("0.0.0.0:{}", config.inventory_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("inventory service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
