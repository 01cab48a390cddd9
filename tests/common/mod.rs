//! Shared wiring for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use tourism_assist::adapters::http::{app_router, AppServices, RouterOptions};
use tourism_assist::adapters::{InMemorySessionRegistry, InstantPacer, MockSubmitter};
use tourism_assist::domain::assistant::{ChatSession, Language};
use tourism_assist::domain::foundation::{ChatSessionId, WizardSessionId};
use tourism_assist::domain::wizard::{InputKind, StepDefinition, WizardScript, WizardSession};

/// `[intro, name (required), notes (optional), confirm]`
pub fn scenario_script() -> WizardScript {
    WizardScript::new(vec![
        StepDefinition::info("intro", "Welcome to the application desk."),
        StepDefinition::question("name", "What is your name?", "name", InputKind::ShortText),
        StepDefinition::question("notes", "Any notes?", "notes", InputKind::LongText).optional(),
        StepDefinition::confirm("confirm", "Please review:"),
    ])
    .unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub submitter: MockSubmitter,
    pub pacer: InstantPacer,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(scenario_script(), MockSubmitter::new(), None)
    }

    pub fn with(script: WizardScript, submitter: MockSubmitter, limit: Option<usize>) -> Self {
        let pacer = InstantPacer::new();
        let wizards: InMemorySessionRegistry<WizardSessionId, WizardSession> = match limit {
            Some(limit) => InMemorySessionRegistry::with_limit(limit),
            None => InMemorySessionRegistry::new(),
        };
        let chats: InMemorySessionRegistry<ChatSessionId, ChatSession> =
            InMemorySessionRegistry::new();

        let services = AppServices {
            script: Arc::new(script),
            submitter: Arc::new(submitter.clone()),
            pacer: Arc::new(pacer.clone()),
            wizards: Arc::new(wizards),
            chats: Arc::new(chats),
            default_language: Language::En,
        };
        let options = RouterOptions {
            enable_tracing: false,
            ..RouterOptions::default()
        };

        Self {
            router: app_router(&services, &options),
            submitter,
            pacer,
        }
    }

    /// Sends one request and returns the status with the parsed JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
