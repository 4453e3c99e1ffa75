mod attach;
mod cli;
mod download;
mod repl;
mod setup;

use std::sync::Arc;

use parley_ai::SessionManager;
use parley_config::schema::{LogLevel, ParleyConfig};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/parley-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Logs go to stderr so they never interleave with the transcript on stdout.
fn init_logging(override_directive: Option<&str>, level: LogLevel) {
    let fallback = level.as_directive();
    let directive = override_directive.unwrap_or(fallback);
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{directive}' ({e}), using '{fallback}'");
        fallback
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into())
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let loaded = parley_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(args.log_level.as_deref(), level);

    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ParleyConfig::default()
    });

    if let Err(e) = parley_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let store = setup::open_store(&config.storage, args.ephemeral, args.data_dir.clone());
    let registry = setup::persona_registry(&config.personas);
    tracing::info!("Persona registry loaded ({} personas)", registry.len());
    let (gateway, notice) = setup::model_gateway(&config.gemini);

    let session = Arc::new(SessionManager::restore(
        registry,
        store,
        gateway,
        setup::session_options(&config.session),
    ));

    if let Some(ref id) = args.persona {
        if session.selected_persona().id != *id {
            if let Err(e) = session.switch_persona(id) {
                tracing::warn!("Ignoring --persona: {e}");
            }
        }
    }

    repl::ChatRepl::new(session).run(notice).await;
    tracing::info!("Shutdown complete");
}
