use axum::{
    Extension, Json, Router, extract::Query, http::StatusCode, response::IntoResponse,
    routing::get,
};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::datasheet::build_client;
use crate::layout::DatasheetLayout;
use crate::product::{ProductResponse, get_product_details};

pub const MISSING_NAME: &str = "Missing product name.";

/// Everything a request needs, built once at startup and shared read-only.
pub struct AppState {
    pub client: Client,
    pub config: Config,
    pub layout: DatasheetLayout,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            client: build_client(&config)?,
            config,
            layout: DatasheetLayout::default(),
        })
    }
}

#[derive(Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
}

/// Returns the name when it is present and non-empty. Whitespace-only names
/// are passed on untouched.
pub fn requested_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

pub async fn get_product(
    Query(params): Query<ProductQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(name) = requested_name(params.name.as_deref()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ProductResponse::error(MISSING_NAME)),
        )
            .into_response();
    };

    let response = get_product_details(&state.client, &state.config, &state.layout, name).await;
    if let ProductResponse::Error { error } = &response {
        info!(product = name, %error, "product lookup failed");
    }
    Json(response).into_response()
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/product", get(get_product))
        .layer(Extension(state))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let bind = config.bind.clone();
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_or_empty_names_are_rejected() {
        assert_eq!(requested_name(None), None);
        assert_eq!(requested_name(Some("")), None);
        assert_eq!(requested_name(Some("   ")), Some("   "));
        assert_eq!(requested_name(Some("Penta 99")), Some("Penta 99"));
    }

    #[test]
    fn state_refuses_unparseable_base_url() {
        assert!(AppState::new(Config::with_base_url("not a url")).is_err());
    }
}
