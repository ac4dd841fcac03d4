mod utils;

use utils::prelude::*;

#[tokio::test]
async fn filters_by_exact_subject() {
    let app = App::new().await;

    let res = app.get("/courses/物理").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<Value> = res.json().await;

    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["subject"], "物理");
    assert_eq!(body[0]["title"], "分子动理论");
    assert!(body[0]["video_url"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn unknown_subject_is_an_empty_list() {
    let app = App::new().await;

    let res = app.get("/courses/历史").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<Value> = res.json().await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn no_authentication_required() {
    let app = App::new().await;

    let res = app.get("/courses/数学").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<Value> = res.json().await;
    assert_eq!(body.len(), 1);
}
