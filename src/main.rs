// VCScout - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Backend URL resolution (fatal if absent or invalid)
// 4. Corpus loading and search backend selection
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use vcscout::app;
pub use vcscout::core;
pub use vcscout::platform;
pub use vcscout::ui;
pub use vcscout::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// VCScout - browse venture capital firms by industry and chat with an
/// investor-research assistant.
#[derive(Parser, Debug)]
#[command(name = "VCScout", version, about)]
struct Cli {
    /// Backend base URL (overrides VCSCOUT_API_URL and config.toml).
    #[arg(short = 'u', long = "api-url")]
    api_url: Option<String>,

    /// Firm corpus file (JSON array or JSON Lines) merged over the built-in records.
    #[arg(short = 'c', long = "corpus")]
    corpus: Option<PathBuf>,

    /// Directory holding config.toml (defaults to the platform config directory).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply the configured body font size to every text style proportionally.
fn configure_text_size(ctx: &egui::Context, body_size: f32) {
    let scale = body_size / util::constants::DEFAULT_FONT_SIZE;
    if (scale - 1.0).abs() < f32::EPSILON {
        return;
    }
    ctx.style_mut(|style| {
        for font in style.text_styles.values_mut() {
            font.size *= scale;
        }
    });
}

fn main() {
    let cli = Cli::parse();

    // Config first: it carries the log level and log file.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "VCScout starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    let env_url = std::env::var(util::constants::API_URL_ENV_VAR).ok();
    let base_url = match platform::config::resolve_base_url(
        cli.api_url.as_deref(),
        env_url.as_deref(),
        config.base_url.as_deref(),
    ) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start without a backend URL");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let backend_url = base_url.to_string();
    let backend = match platform::api::HttpBackend::new(
        base_url,
        Duration::from_secs(config.timeout_secs),
    ) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    // Corpus: CLI override > config path > built-in only
    let corpus_path = cli.corpus.clone().or_else(|| config.corpus_path.clone());
    let (corpus, corpus_errors) = app::corpus_mgr::load_corpus(corpus_path.as_deref());
    for err in &corpus_errors {
        tracing::warn!(error = %err, "Corpus loading warning");
    }

    let search: Arc<dyn core::search::ProfileSearch> = match config.search_backend {
        platform::config::SearchBackendKind::Memory => {
            Arc::new(core::search::InMemorySearch::new(corpus.clone()))
        }
        platform::config::SearchBackendKind::Remote => Arc::new(backend.clone()),
    };

    let mut state = app::state::AppState::new(corpus.len(), config.dark_mode, cli.debug);
    state.warnings.extend(config_warnings);
    state
        .warnings
        .extend(corpus_errors.iter().map(|e| e.to_string()));

    let search_manager = app::search::SearchManager::new(search);
    state.backend_url = Some(backend_url);
    state.remote_search = search_manager.is_remote();
    let chat_manager = app::chat::ChatManager::new(Arc::new(backend.clone()));
    let health_check = app::health::HealthCheck::spawn(backend);

    tracing::info!(
        firms = corpus.len(),
        remote_search = search_manager.is_remote(),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            configure_text_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::VcScoutApp::new(
                state,
                search_manager,
                chat_manager,
                health_check,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch VCScout GUI: {e}");
        std::process::exit(1);
    }
}
