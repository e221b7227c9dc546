// Corpus Cleaner - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation (debug mode support)
// 3. Style setup (theme, font size, system fonts)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can keep using
// `crate::app::...`, `crate::ui::...` etc.
pub use corpus_cleaner::app;
pub use corpus_cleaner::core;
pub use corpus_cleaner::platform;
pub use corpus_cleaner::ui;
pub use corpus_cleaner::util;

use clap::Parser;
use std::path::PathBuf;

/// Apply theme and font size from the validated configuration.
fn configure_style(ctx: &egui::Context, config: &platform::config::AppConfig) {
    ctx.set_visuals(if config.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let size = config.font_size;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => size * 1.4,
                egui::TextStyle::Small => size * 0.8,
                _ => size,
            };
        }
    });
}

/// On Windows, put Segoe UI ahead of the egui built-ins so accented and
/// non-Latin corpus text renders instead of falling back to empty boxes.
/// Other platforms keep the egui defaults.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();
        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded.push(name);
                }
                Err(e) => {
                    tracing::warn!(font = name, error = %e, "System font unavailable");
                }
            }
        }
        if loaded.is_empty() {
            return;
        }

        if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
            for (i, name) in loaded.iter().enumerate() {
                proportional.insert(i, (*name).to_owned());
            }
        }
        // Monospace keeps Hack first so the preview columns stay aligned.
        if let Some(monospace) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
            for name in &loaded {
                monospace.push((*name).to_owned());
            }
        }
        ctx.set_fonts(fonts);
        tracing::info!(fonts = ?loaded, "System fonts configured");
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// Corpus Cleaner - preview and batch-apply regex clean-ups to a folder of
/// text files, logging every batch.
///
/// The root folder holds one subfolder per corpus variant; each commit
/// writes a new subfolder and appends a block to the root's log file.
#[derive(Parser, Debug)]
#[command(name = "corpus-cleaner", version, about)]
struct Cli {
    /// Root folder to open (choose one in the window if omitted).
    path: Option<PathBuf>,

    /// Open the demo root folder configured in config.toml.
    #[arg(long = "demo", conflicts_with = "path")]
    demo: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take part in the
    // filter; its warnings are logged once the subscriber is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Corpus Cleaner starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let mut state = app::state::AppState::new(config.log_file_name.clone(), cli.debug);
    state.session.warnings.extend(config_warnings);

    let start_root = if cli.demo {
        Some(config.demo_root.clone())
    } else {
        cli.path.clone()
    };
    if let Some(root) = start_root {
        state.request(app::actions::Action::OpenRoot(root));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            configure_style(&cc.egui_ctx, &config);
            Ok(Box::new(gui::CorpusCleanerApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Corpus Cleaner GUI: {e}");
        std::process::exit(1);
    }
}
