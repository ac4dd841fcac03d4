mod list;

use crate::StateTrait;
use axum::{routing::get, Router};

/// Routes for the course catalog
///
/// GET /courses/:subject
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route("/:subject", get(list::list_courses::<S>))
}
