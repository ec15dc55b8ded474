//! mela-server binary entrypoint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use mela::{
    AppState, ConversationEngine, MelaConfig, MemorySessionStore,
    cli::{Cli, Commands, output::Output},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let out = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init { ref path, force }) => mela::cli::init::run(path, force, &out),
        Some(Commands::Config { full, validate }) => show_config(&cli, full, validate, &out),
        None => serve(&cli, &out).await,
    }
}

fn show_config(cli: &Cli, full: bool, validate: bool, out: &Output) -> anyhow::Result<()> {
    let config = MelaConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if validate {
        config.validate()?;
        out.success(&format!("{} is valid", cli.config.display()));
    }

    if full {
        let rendered = toml::to_string_pretty(&config)?;
        println!("{rendered}");
    } else {
        out.info(&format!(
            "server: {}:{}",
            config.server.host, config.server.port
        ));
        out.info(&format!("log level: {}", config.server.log_level));
        out.info(&format!(
            "session ttl: {}s (sweep every {}s)",
            config.session.ttl_secs, config.session.sweep_interval_secs
        ));
    }

    Ok(())
}

async fn serve(cli: &Cli, out: &Output) -> anyhow::Result<()> {
    let config = MelaConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);
    out.banner();

    let sessions = Arc::new(MemorySessionStore::new(config.session.ttl()));
    spawn_session_sweeper(sessions.clone(), config.session.sweep_interval());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        engine: Arc::new(ConversationEngine::new()),
        sessions,
    };

    let app = mela::api::routes::create_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", mela::api::ApiDoc::openapi()),
        )
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "mela server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing(config: &MelaConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.server.log_level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Periodically drop sessions whose TTL elapsed so the store cannot grow
/// with every user identifier ever seen.
fn spawn_session_sweeper(store: Arc<MemorySessionStore>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // the first tick fires immediately
        loop {
            ticker.tick().await;
            let swept = store.sweep_expired();
            if swept > 0 {
                debug!(swept, "dropped expired sessions");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
