//! Shared helpers: an in-memory app driven through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use naija_api::auth::hash_password;
use naija_api::{AppState, AppStateInner, Config};
use naija_db::models::NewEmoji;
use naija_db::{Database, EmojiStore};

pub const SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Two users (`test`, `tester`) and one emoji (id 1) created by `test`.
    pub fn new() -> Self {
        let config = Config::from_lookup(|key| match key {
            "NAIJA_JWT_SECRET" => Some(SECRET.to_string()),
            _ => None,
        })
        .expect("test config");

        let db = Database::open_in_memory().expect("in-memory db");
        for (username, fullname) in [("test", "John Test"), ("tester", "Paul Test")] {
            let hash = hash_password("test").expect("hash");
            db.create_user(username, fullname, &hash).expect("seed user");
        }

        let keywords = vec!["sad".to_string(), "happy".to_string()];
        db.insert_emoji(&NewEmoji {
            name: "grin to the bone",
            chars: "u-1989",
            category: "category A",
            created_by: "test",
            keywords: &keywords,
        })
        .expect("seed emoji");

        let state: AppState = Arc::new(AppStateInner::new(db, &config));
        let router = naija_api::build_router(state.clone());

        Self { router, state }
    }

    pub fn token(&self, username: &str) -> String {
        self.state.gate.issue(username).expect("issue token")
    }

    pub fn emoji_count(&self) -> usize {
        self.state.db.list_emojis().expect("list").len()
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", token);
        }

        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).expect("serialize body"))),
            None => req.body(Body::empty()),
        }
        .expect("build request");

        let response = self.router.clone().oneshot(req).await.expect("send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None, None).await
    }
}

pub fn message(text: &str) -> Value {
    serde_json::json!({ "message": text })
}
