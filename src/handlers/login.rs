use crate::{credentials, error, extractors::Json, Result, StateTrait};
use axum::extract::State;
use entity::users::{self, Role};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct Response {
    access_token: String,
    token_type: &'static str,
    role: Role,
    username: String,
    grade: Option<String>,
    avatar: Option<String>,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    // a missing user and a wrong password are indistinguishable on purpose
    let Some(user) = users::Entity::find_by_username(&request.username)
        .one(state.db())
        .await?
    else {
        return Err(error::INVALID_CREDENTIALS);
    };

    if !credentials::verify(request.password, user.password.clone()).await {
        return Err(error::INVALID_CREDENTIALS);
    }

    let access_token = state.jwt().issue(&user)?;

    Ok(Json(Response {
        access_token,
        token_type: "bearer",
        role: user.role,
        username: user.username,
        grade: user.grade,
        avatar: user.avatar,
    }))
}
