use crate::{credentials, error, extractors::Json, jwt::Claims, Result, StateTrait};
use axum::extract::State;
use entity::users;
use sea_orm::{ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    pub grade: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    message: &'static str,
    grade: Option<String>,
    username: String,
    avatar: Option<String>,
}

/// Overwrites the mutable profile fields.
///
/// `grade` and `avatar` are assigned whatever the request carries, so an
/// omitted field and an explicit null both clear the stored value. The
/// password is only re-hashed when a non-empty one is supplied.
pub async fn update_profile<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_username(&claims.sub)
        .one(state.db())
        .await?
        .ok_or(error::UNKNOWN_USER)?;

    let mut active = user.into_active_model();
    active.grade = Set(request.grade);
    active.avatar = Set(request.avatar);

    if let Some(password) = request.password.filter(|password| !password.is_empty()) {
        active.password = Set(credentials::hash(password).await?);
    }

    let user = users::Entity::update(active).exec(state.db()).await?;

    Ok(Json(Response {
        message: "profile updated",
        grade: user.grade,
        username: user.username,
        avatar: user.avatar,
    }))
}
