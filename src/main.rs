//! Tourism Assist server binary.
//!
//! Loads configuration, installs tracing, wires adapters and serves the
//! HTTP surface until Ctrl+C or SIGTERM.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tourism_assist::adapters::http::{app_router, AppServices, RouterOptions};
use tourism_assist::adapters::{
    HttpSubmitter, HttpSubmitterConfig, IdleSweeper, IdleSweeperConfig, InMemorySessionRegistry,
    LoggingSubmitter, PacingSchedule, TokioPacer,
};
use tourism_assist::config::{AppConfig, SubmissionMode};
use tourism_assist::domain::assistant::ChatSession;
use tourism_assist::domain::foundation::{ChatSessionId, WizardSessionId};
use tourism_assist::domain::wizard::{WizardScript, WizardSession};
use tourism_assist::ports::{ApplicationSubmitter, ChatRegistry, WizardRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let script = Arc::new(load_script(&config)?);
    info!(
        steps = script.len(),
        questions = script.answerable_count(),
        "Wizard script loaded"
    );

    let services = AppServices {
        script,
        submitter: build_submitter(&config)?,
        pacer: Arc::new(TokioPacer::new(PacingSchedule::from(&config))),
        wizards: wizard_registry(&config),
        chats: chat_registry(&config),
        default_language: config.assistant.default_language,
    };
    let app = app_router(&services, &RouterOptions::from(&config));

    let (sweep_shutdown, sweep_signal) = watch::channel(false);
    let wizard_sweeper = IdleSweeper::new(
        Arc::clone(&services.wizards),
        IdleSweeperConfig::new(config.wizard.idle_timeout()),
        "wizard",
    );
    let chat_sweeper = IdleSweeper::new(
        Arc::clone(&services.chats),
        IdleSweeperConfig::new(config.assistant.idle_timeout()),
        "chat",
    );
    let wizard_signal = sweep_signal.clone();
    let sweepers = tokio::spawn(async move {
        tokio::join!(wizard_sweeper.run(wizard_signal), chat_sweeper.run(sweep_signal));
    });

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!(%address, environment = ?config.server.environment, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = sweep_shutdown.send(true);
    let _ = sweepers.await;
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn load_script(config: &AppConfig) -> Result<WizardScript, Box<dyn Error>> {
    match &config.wizard.script_path {
        Some(path) => {
            info!(path = %path.display(), "Loading wizard script");
            Ok(WizardScript::from_yaml_file(path)?)
        }
        None => Ok(WizardScript::application_form()),
    }
}

fn build_submitter(config: &AppConfig) -> Result<Arc<dyn ApplicationSubmitter>, Box<dyn Error>> {
    let submission = &config.submission;
    match submission.mode {
        SubmissionMode::Log => Ok(Arc::new(LoggingSubmitter::new())),
        SubmissionMode::Http => {
            let endpoint = submission
                .endpoint
                .clone()
                .ok_or("submission.endpoint is required in http mode")?;
            info!(endpoint = %endpoint, "Submitting applications over HTTP");
            let http_config = HttpSubmitterConfig::new(endpoint)
                .with_timeout(submission.timeout())
                .with_secret_token(submission.bearer_token.clone());
            Ok(Arc::new(HttpSubmitter::new(http_config)?))
        }
    }
}

fn wizard_registry(config: &AppConfig) -> Arc<WizardRegistry> {
    let registry: InMemorySessionRegistry<WizardSessionId, WizardSession> =
        match config.wizard.max_open_sessions {
            Some(limit) => InMemorySessionRegistry::with_limit(limit),
            None => InMemorySessionRegistry::new(),
        };
    Arc::new(registry)
}

fn chat_registry(config: &AppConfig) -> Arc<ChatRegistry> {
    let registry: InMemorySessionRegistry<ChatSessionId, ChatSession> =
        match config.assistant.max_open_sessions {
            Some(limit) => InMemorySessionRegistry::with_limit(limit),
            None => InMemorySessionRegistry::new(),
        };
    Arc::new(registry)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
