mod utils;

use utils::prelude::*;

#[tokio::test]
async fn updates_grade_and_avatar() {
    let app = App::new().await;
    let user = app.register_user("alice", "pw123").await;

    let res = app
        .put("/my/profile")
        .user(&user)
        .json(&json!({
            "grade": "初三",
            "avatar": "https://example.com/a.png",
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_json_include!(
        actual: body,
        expected: json!({
            "username": "alice",
            "grade": "初三",
            "avatar": "https://example.com/a.png",
        })
    );
    assert!(body["message"].is_string());

    // the next login reflects the new grade
    let res = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "pw123",
        }))
        .send()
        .await;
    let body: Value = res.json().await;
    assert_eq!(body["grade"], "初三");
}

#[tokio::test]
async fn omitted_fields_clear_the_stored_value() {
    let app = App::new().await;
    let user = app.register_user("alice", "pw123").await;

    let res = app
        .put("/my/profile")
        .user(&user)
        .json(&json!({ "grade": "初三" }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .put("/my/profile")
        .user(&user)
        .json(&json!({ "avatar": "https://example.com/a.png" }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["grade"], Value::Null);
    assert_eq!(body["avatar"], "https://example.com/a.png");
}

#[tokio::test]
async fn changes_the_password() {
    let app = App::new().await;
    let user = app.register_user("alice", "pw123").await;

    let res = app
        .put("/my/profile")
        .user(&user)
        .json(&json!({ "password": "stronger" }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "pw123",
        }))
        .send()
        .await;
    assert_error!(res, error::INVALID_CREDENTIALS);

    app.login_token("alice", "stronger").await;
}

#[tokio::test]
async fn empty_password_is_ignored() {
    let app = App::new().await;
    let user = app.register_user("alice", "pw123").await;

    let res = app
        .put("/my/profile")
        .user(&user)
        .json(&json!({ "password": "" }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    app.login_token("alice", "pw123").await;
}

#[tokio::test]
async fn requires_authentication() {
    let app = App::new().await;

    let res = app
        .put("/my/profile")
        .json(&json!({ "grade": "初三" }))
        .send()
        .await;

    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}
