//! Cascade Viewer GUI Application
//!
//! Interactive viewer for multi-run capture documents built with the egui
//! framework. The viewer features:
//! - A page select box for switching between runs of a capture
//! - A detail panel for the selected page's metadata
//! - A status bar with document totals
//! - An in-memory demo document for trying the viewer without a file
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `ui/` - UI panel rendering and the select box widget

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator};
use ui::HeaderInteraction;

/// Main application entry point that initializes and launches the cascade viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 500.0])
            .with_title("Cascade Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Cascade Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(CascadeViewerApp::new(initial_file)))),
    )
}

/// The main cascade viewer application.
///
/// Delegates workflow handling to `ApplicationCoordinator` and panel
/// rendering to the `ui` modules; this struct only wires them together.
struct CascadeViewerApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl CascadeViewerApp {
    /// Creates a new viewer instance, optionally loading a capture on startup.
    fn new(initial_file: Option<PathBuf>) -> Self {
        Self {
            state: AppState::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles header interactions by delegating to ApplicationCoordinator.
    fn handle_header_interaction(&mut self, interaction: HeaderInteraction) {
        match interaction {
            HeaderInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, path);
            }
            HeaderInteraction::OpenVirtualDocRequested => {
                ApplicationCoordinator::open_virtual_doc(&mut self.state);
            }
            HeaderInteraction::PageChanged(value) => {
                ApplicationCoordinator::handle_page_change(&mut self.state, &value);
            }
        }
    }
}

impl eframe::App for CascadeViewerApp {
    /// Main update loop that renders all UI panels and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, path);
        }

        let mut interaction = None;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            interaction = ui::render_header(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(ui, &self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_page_panel(ui, &self.state);
        });

        if let Some(interaction) = interaction {
            self.handle_header_interaction(interaction);
        }
    }
}
