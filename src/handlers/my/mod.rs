mod heatmap;
mod mistakes;
mod profile;

use crate::StateTrait;
use axum::{
    routing::{get, put},
    Router,
};

/// Routes for the caller's own data, all of them require a bearer token
///
/// PUT /my/profile
/// GET /my/heatmap
/// GET /my/mistakes
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/profile", put(profile::update_profile::<S>))
        .route("/heatmap", get(heatmap::get_heatmap::<S>))
        .route("/mistakes", get(mistakes::get_mistakes::<S>))
}
