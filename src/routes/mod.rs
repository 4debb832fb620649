mod catalog;
mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

use crate::middleware::apply_http_layers;
use crate::state::AppState;
use axum::Router;

/// Full application: common routes at the root, catalog routes under the configured prefix.
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();
    let catalog = catalog_routes(state.clone());
    let api = if config.api_prefix.is_empty() {
        Router::new().merge(catalog)
    } else {
        Router::new().nest(&config.api_prefix, catalog)
    };
    let app = Router::new().merge(common_routes(state)).merge(api);
    apply_http_layers(app, &config)
}
