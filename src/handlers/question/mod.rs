mod list;
mod submit;

use crate::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for the question bank
///
/// GET  /questions/:subject
/// POST /questions/submit
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/submit", post(submit::submit::<S>))
        .route("/:subject", get(list::list_questions::<S>))
}
