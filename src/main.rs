//! Surface Viewport.
//!
//! Interaktive Orbit-Ansicht einer parametrischen Fläche mit
//! Kontrollpunkt-Editor, Idle-Animation und Auto-Fit.

use eframe::egui;
use std::time::{Duration, Instant};
use surface_viewport::{ui, AppController, AppIntent, AppState, BezierPatch, StepList, ViewerOptions};

/// Obergrenze für Frame-Deltas (z.B. nach Minimieren).
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Surface Viewport v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Surface Viewport"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Surface Viewport",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    last_frame: Instant,
    active: bool,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let options = ViewerOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
            }
        }

        let state = AppState::new(
            Box::new(BezierPatch::new()),
            Box::new(StepList::default_tour()),
            options,
        );

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            last_frame: Instant::now(),
            active: false,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_frame).min(MAX_FRAME_DT);
        self.last_frame = now;

        let mut events = self.lifecycle_events(ctx, now);
        events.extend(self.collect_ui_events(ctx, now));
        events.push(AppIntent::FrameTick { now, dt });

        self.process_events(events);

        self.maybe_request_repaint(ctx, now);
    }
}

impl ViewerApp {
    /// Aktiviert den Idle-Monitor beim ersten Frame, pausiert ihn bei minimiertem Fenster.
    fn lifecycle_events(&mut self, ctx: &egui::Context, now: Instant) -> Vec<AppIntent> {
        let minimized = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        match (self.active, minimized) {
            (false, false) => {
                self.active = true;
                vec![AppIntent::ViewActivated { now }]
            }
            (true, true) => {
                self.active = false;
                vec![AppIntent::ViewDeactivated]
            }
            _ => vec![],
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context, now: Instant) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        ui::show_tutorial(ctx, &self.state);

        let viewport_rect = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                events.extend(self.input.collect_viewport_events(ui, &response, now));

                ui::paint_surface(ui.painter(), rect, &self.state);
                rect
            })
            .inner;

        events.extend(ui::show_coordinate_label(ctx, viewport_rect, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Dauerhafte Frames nur während Animationen; sonst bis zur nächsten Idle-Prüfung schlafen.
    fn maybe_request_repaint(&mut self, ctx: &egui::Context, now: Instant) {
        if self.state.take_redraw_request()
            || self.state.animation.is_busy()
            || self.state.resize.is_pending()
        {
            ctx.request_repaint();
        } else if let Some(due) = self.state.idle_monitor.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}
