use axum::middleware;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::services::ServeDir;

use app_state::AppState;
use routes::{
    delete_account, login, logout, my_info, other_info, password_change, register, update,
};
use services::auth::authenticate;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let users = Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
        .route("/update", patch(update::update))
        .route("/pw_change", patch(password_change::change_password))
        .route("/my_info", get(my_info::my_info))
        .route("/other_info/:nickname", get(other_info::other_info))
        .route("/delete", delete(delete_account::delete_account))
        .route("/logout", post(logout::logout));

    Router::new()
        .nest("/api/users", users)
        .nest_service(
            "/images",
            ServeDir::new(app_state.config.upload_dir()),
        )
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            authenticate,
        ))
        .with_state(app_state)
}

pub async fn get_db_pool(db_url: &str) -> welds::errors::Result<welds::connections::any::AnyClient> {
    Ok(welds::connections::connect(db_url).await?)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
