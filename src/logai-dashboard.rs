//! LogAi Dashboard GUI Application
//!
//! Desktop frontend for the LogAi log-analysis product, built with egui.
//! The dashboard features:
//! - Navigation sidebar with collapsible route list
//! - Overview, logs, anomalies, chat, and settings views

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Dark/light theme with persistent, hydration-safe preference handling
//! - Snapshot file loading (plain or Brotli-compressed) and a demo feed
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (log filtering)
//! - `presentation/` - Theme palettes and color mapping
//! - `io/` - Snapshot loading and demo data generation
//! - `utils/` - Formatting helpers
//! - `state/` - Navigation, data, chat, and settings state
//! - `ui/` - UI panel rendering and layout

use eframe::egui;
use std::path::PathBuf;

use logai::PreferenceStore;

mod app;
mod domain;
mod io;
mod presentation;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the LogAi
/// dashboard GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments to check for an initial snapshot to load
    let initial_snapshot = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("LogAi Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "LogAi Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(LogaiDashboardApp::new(cc, initial_snapshot)))),
    )
}

/// The main LogAi dashboard application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles data loading, chat, and auto refresh
/// - `ThemeCoordinator` applies the theme preference to the UI
/// - `PanelManager` handles UI panel layout and rendering
struct LogaiDashboardApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous snapshot loader
    loader: AsyncLoader,
    /// Optional snapshot to load on first frame
    pending_snapshot_load: Option<PathBuf>,
    /// Load demo data on the first frame when no snapshot was requested
    pending_demo_seed: bool,
}

impl LogaiDashboardApp {
    /// Creates a new dashboard instance with settings restored from
    /// persistent storage and the theme preference hydrated.
    fn new(cc: &eframe::CreationContext, initial_snapshot: Option<PathBuf>) -> Self {
        let settings = SettingsCoordinator::load_settings(cc.storage);
        let locale = SettingsCoordinator::load_locale(cc.storage);
        let sidebar_expanded = SettingsCoordinator::load_sidebar_expanded(cc.storage);

        // Hydrate before the first frame so the first rendered visuals
        // already reflect the persisted or system-derived choice.
        let mut prefs = PreferenceStore::from_system();
        prefs.hydrate();

        let pending_demo_seed = initial_snapshot.is_none();
        Self {
            state: AppState::with_settings(prefs, settings, locale, sidebar_expanded),
            loader: AsyncLoader::new(),
            pending_snapshot_load: initial_snapshot,
            pending_demo_seed,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenSnapshotRequested(path) => {
                ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::DemoFeedRequested => {
                ApplicationCoordinator::load_demo_feed(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::RefreshRequested => {
                ApplicationCoordinator::refresh(&mut self.state, &mut self.loader, ctx);
            }
            ui::panel_manager::PanelInteraction::ChatSubmitted => {
                ApplicationCoordinator::submit_chat(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::AnomalyStatusChanged { index, status } => {
                self.state.data.set_anomaly_status(index, status);
            }
        }
    }
}

impl eframe::App for LogaiDashboardApp {
    /// Called when the app is being shut down - persists window-local
    /// settings. The theme preference persists itself on every change.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_settings(storage, self.state.settings.values());
        SettingsCoordinator::save_locale(storage, self.state.i18n.locale());
        SettingsCoordinator::save_sidebar_expanded(storage, self.state.nav.sidebar_expanded());
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply the theme preference
    /// 3. Run auto refresh and first-frame loading
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if ApplicationCoordinator::maybe_auto_refresh(&mut self.state, &mut self.loader) {
            ctx.request_repaint();
        }

        // Load the snapshot given on the command line (first frame only)
        if let Some(path) = self.pending_snapshot_load.take() {
            ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.loader, path, ctx);
        } else if self.pending_demo_seed {
            self.pending_demo_seed = false;
            ApplicationCoordinator::load_demo_feed(&mut self.state, &mut self.loader);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
