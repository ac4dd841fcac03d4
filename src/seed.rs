use crate::{credentials, StateTrait};
use anyhow::Context;
use entity::{courses, questions, users};
use sea_orm::{ActiveValue::Set, EntityTrait, PaginatorTrait};
use serde::Deserialize;
use std::{collections::BTreeMap, fs};

const ADMIN_USERNAME: &str = "admin";

const INITIAL_COURSES: &[(&str, &str, &str)] = &[
    (
        "中考数学复习全集",
        "数学",
        "https://player.bilibili.com/player.html?bvid=BV1qE411H7Uv",
    ),
    (
        "分子动理论",
        "物理",
        "https://player.bilibili.com/player.html?bvid=BV1Mb421n7nB",
    ),
    (
        "初中化学公开课",
        "化学",
        "https://player.bilibili.com/player.html?bvid=BV1wb411x78e",
    ),
    (
        "七年级地理上册",
        "地理",
        "https://player.bilibili.com/player.html?bvid=BV1ni4y1u7qn",
    ),
    (
        "初中生物基础课",
        "生物",
        "https://player.bilibili.com/player.html?bvid=BV1n94y1g7XG",
    ),
    (
        "零基础英语拯救计划",
        "英语",
        "https://player.bilibili.com/player.html?bvid=BV1wt411G7QY",
    ),
    (
        "七年级道法名师课",
        "道法",
        "https://player.bilibili.com/player.html?bvid=BV1K4KyzNEVJ",
    ),
    (
        "初中语文全题型讲解",
        "语文",
        "https://player.bilibili.com/player.html?bvid=BV1jc411c7CS",
    ),
];

#[derive(Debug, Deserialize)]
struct QuestionBank {
    #[serde(rename = "初中题库")]
    subjects: BTreeMap<String, Vec<BankEntry>>,
}

#[derive(Debug, Deserialize)]
struct BankEntry {
    #[serde(rename = "题目")]
    content: String,
    #[serde(rename = "选项", default)]
    options: BTreeMap<String, String>,
    #[serde(rename = "答案")]
    answer: String,
}

/// Populates an empty database with the default admin account, the course
/// catalog and the question bank. Every step is idempotent and best-effort:
/// a failure is logged and the server starts anyway.
pub async fn run<S: StateTrait>(state: &S) {
    if let Err(error) = seed_admin(state).await {
        error!("failed to seed the admin account: {error:?}");
    }

    if let Err(error) = seed_courses(state).await {
        error!("failed to seed the course catalog: {error:?}");
    }

    if let Err(error) = seed_questions(state).await {
        error!("failed to seed the question bank: {error:?}");
    }
}

async fn seed_admin<S: StateTrait>(state: &S) -> anyhow::Result<()> {
    let existing = users::Entity::find_by_username(ADMIN_USERNAME)
        .one(state.db())
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let password = credentials::hash(state.config().admin_password.clone())
        .await
        .map_err(|error| anyhow::anyhow!("failed to hash the admin password: {error:?}"))?;

    let admin = users::ActiveModel {
        username: Set(ADMIN_USERNAME.to_owned()),
        password: Set(password),
        role: Set(users::Role::Admin),
        grade: Set(None),
        avatar: Set(None),
        ..Default::default()
    };

    users::Entity::insert(admin)
        .exec_without_returning(state.db())
        .await?;

    info!("created the default admin account");

    Ok(())
}

async fn seed_courses<S: StateTrait>(state: &S) -> anyhow::Result<()> {
    if courses::Entity::find().count(state.db()).await? > 0 {
        return Ok(());
    }

    let models = INITIAL_COURSES
        .iter()
        .map(|(title, subject, video_url)| courses::ActiveModel {
            title: Set((*title).to_owned()),
            subject: Set((*subject).to_owned()),
            video_url: Set((*video_url).to_owned()),
            ..Default::default()
        });

    courses::Entity::insert_many(models)
        .exec_without_returning(state.db())
        .await?;

    info!("imported {} course videos", INITIAL_COURSES.len());

    Ok(())
}

async fn seed_questions<S: StateTrait>(state: &S) -> anyhow::Result<()> {
    if questions::Entity::find().count(state.db()).await? > 0 {
        return Ok(());
    }

    let path = &state.config().question_bank;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("question bank not found at {}", path.display()))?;

    let models = parse_question_bank(&raw)?;
    let count = models.len();

    if count == 0 {
        warn!("question bank at {} is empty", path.display());
        return Ok(());
    }

    questions::Entity::insert_many(models)
        .exec_without_returning(state.db())
        .await?;

    info!("imported {} questions from {}", count, path.display());

    Ok(())
}

fn parse_question_bank(raw: &str) -> anyhow::Result<Vec<questions::ActiveModel>> {
    let bank: QuestionBank = serde_json::from_str(raw).context("malformed question bank")?;

    let mut models = Vec::new();

    for (subject, entries) in bank.subjects {
        for entry in entries {
            models.push(questions::ActiveModel {
                subject: Set(subject.clone()),
                content: Set(entry.content),
                options: Set(serde_json::to_string(&entry.options)?),
                answer: Set(entry.answer),
                ..Default::default()
            });
        }
    }

    Ok(models)
}
