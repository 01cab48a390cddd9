//! Router assembly - wires handlers to adapters and applies the HTTP layers.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::assistant::{
    CloseChatHandler, GetChatHandler, QuickActionHandler, SendChatMessageHandler,
    SetLanguageHandler, ShowFaqsHandler, StartChatHandler,
};
use crate::application::handlers::wizard::{
    CloseWizardHandler, ConfirmSubmissionHandler, GetWizardHandler, OpenWizardHandler,
    SubmitAnswerHandler,
};
use crate::config::AppConfig;
use crate::domain::assistant::Language;
use crate::domain::wizard::WizardScript;
use crate::ports::{ApplicationSubmitter, ChatRegistry, ResponsePacer, WizardRegistry};

use super::assistant::{assistant_routes, AssistantHandlers};
use super::health::health_routes;
use super::wizard::{wizard_routes, WizardHandlers};

/// Adapters the HTTP surface runs on.
#[derive(Clone)]
pub struct AppServices {
    pub script: Arc<WizardScript>,
    pub submitter: Arc<dyn ApplicationSubmitter>,
    pub pacer: Arc<dyn ResponsePacer>,
    pub wizards: Arc<WizardRegistry>,
    pub chats: Arc<ChatRegistry>,
    pub default_language: Language,
}

impl AppServices {
    pub fn wizard_handlers(&self) -> WizardHandlers {
        WizardHandlers::new(
            Arc::new(OpenWizardHandler::new(
                Arc::clone(&self.wizards),
                Arc::clone(&self.script),
                Arc::clone(&self.pacer),
            )),
            Arc::new(SubmitAnswerHandler::new(
                Arc::clone(&self.wizards),
                Arc::clone(&self.pacer),
            )),
            Arc::new(ConfirmSubmissionHandler::new(
                Arc::clone(&self.wizards),
                Arc::clone(&self.submitter),
                Arc::clone(&self.pacer),
            )),
            Arc::new(CloseWizardHandler::new(Arc::clone(&self.wizards))),
            Arc::new(GetWizardHandler::new(Arc::clone(&self.wizards))),
        )
    }

    pub fn assistant_handlers(&self) -> AssistantHandlers {
        AssistantHandlers::new(
            Arc::new(StartChatHandler::new(
                Arc::clone(&self.chats),
                self.default_language,
            )),
            Arc::new(SendChatMessageHandler::new(
                Arc::clone(&self.chats),
                Arc::clone(&self.pacer),
            )),
            Arc::new(QuickActionHandler::new(
                Arc::clone(&self.chats),
                Arc::clone(&self.pacer),
            )),
            Arc::new(ShowFaqsHandler::new(Arc::clone(&self.chats))),
            Arc::new(SetLanguageHandler::new(Arc::clone(&self.chats))),
            Arc::new(GetChatHandler::new(Arc::clone(&self.chats))),
            Arc::new(CloseChatHandler::new(Arc::clone(&self.chats))),
        )
    }
}

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Allowed origins; any origin when empty.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub enable_tracing: bool,
    pub verbose_errors: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
            enable_tracing: true,
            verbose_errors: false,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            cors_origins: config.server.cors_origins_list(),
            request_timeout: config.server.request_timeout(),
            enable_tracing: config.features.enable_tracing,
            verbose_errors: config.features.verbose_errors,
        }
    }
}

/// Builds the full application router.
pub fn app_router(services: &AppServices, options: &RouterOptions) -> Router {
    let wizard = services
        .wizard_handlers()
        .with_verbose_errors(options.verbose_errors);
    let assistant = services
        .assistant_handlers()
        .with_verbose_errors(options.verbose_errors);

    let mut router = Router::new()
        .merge(health_routes())
        .nest("/api/wizard", wizard_routes(wizard))
        .nest("/api/assistant", assistant_routes(assistant))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins));

    if options.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
