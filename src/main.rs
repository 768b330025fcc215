use std::sync::Arc;

use tokio::sync::RwLock;
use welds::connections::any::AnyClient;

use user_service::app_state::{AppState, BannedTokenStoreType};
use user_service::services::{
    ImageStore, RedisBannedTokenStore, RedisService, SqlUserStore, TokenService,
};
use user_service::utils::Config;
use user_service::{get_db_pool, migrations, Application};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));

    let redis = RedisService::new(config.redis_host()).expect("Failed to open redis client");
    let banned_tokens: BannedTokenStoreType =
        Arc::new(RwLock::new(RedisBannedTokenStore::new(redis)));
    let token_service = Arc::new(TokenService::new(&config, banned_tokens));

    let db_client = get_configured_db_connection(config.database_url()).await;
    let user_store = Arc::new(RwLock::new(SqlUserStore::new(db_client)));

    let image_store =
        Arc::new(ImageStore::new(config.upload_dir()).expect("Failed to create upload directory"));

    let app_state = AppState::new(user_store, token_service, image_store, config);
    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn get_configured_db_connection(db_url: &str) -> AnyClient {
    let db_client = get_db_pool(db_url)
        .await
        .expect("Failed to connect to database");
    if let Err(e) = migrations::up(&db_client).await {
        log::error!("migrations failed: {}", e);
    }
    db_client
}
