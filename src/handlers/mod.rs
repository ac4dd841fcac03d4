mod course;
mod login;
mod my;
mod question;
mod register;

use crate::state::StateTrait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/register", post(register::register::<S>))
        .route("/login", post(login::login::<S>))
        .nest("/courses", course::routes::<S>())
        .nest("/questions", question::routes::<S>())
        .nest("/my", my::routes::<S>())
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
