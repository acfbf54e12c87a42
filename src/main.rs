use std::sync::Arc;

use tokio::sync::RwLock;

use kamron::api::create_api_router;
use kamron::services::analytics::CannedAnalyst;
use kamron::store::gate::EnvAccessCodes;
use kamron::store::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let codes = EnvAccessCodes::from_env();
    let state = Arc::new(RwLock::new(AppState::seeded()));

    let app = create_api_router(state, Arc::new(codes), Arc::new(CannedAnalyst));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("Running at {:?}", listener);
    axum::serve(listener, app).await.unwrap();
}
