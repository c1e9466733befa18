//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktion ===
            AppCommand::RegisterInteraction { now } => handlers::interaction::register(state, now),
            AppCommand::SetCurrentAction { action } => {
                handlers::interaction::set_current_action(state, action)
            }
            AppCommand::AdvanceTutorial => handlers::interaction::advance_tutorial(state),
            AppCommand::SuspendTutorial => handlers::interaction::suspend_tutorial(state),
            AppCommand::ReloadSession { now } => handlers::interaction::reload_session(state, now),

            // === Kontrollpunkte ===
            AppCommand::ActivatePointControls { axis } => {
                handlers::editing::activate_point_controls(state, axis)
            }
            AppCommand::DeactivatePointControls => {
                handlers::editing::deactivate_point_controls(state)
            }
            AppCommand::HideCoordinates => handlers::editing::hide_coordinates(state),
            AppCommand::ApplyActionDelta { action, delta } => {
                handlers::interaction::apply_action_delta(state, action, delta)
            }

            // === Fläche & Animation ===
            AppCommand::StartRandomize => handlers::animation::start_randomize(state),
            AppCommand::RestoreSurface => handlers::animation::restore_surface(state),
            AppCommand::CycleDisplay => handlers::animation::cycle_display(state),
            AppCommand::AdvanceSurfaceAnimation { dt } => {
                handlers::animation::advance_surface(state, dt)
            }

            // === Auto-Fit ===
            AppCommand::StartAutoFit { speed } => handlers::animation::start_auto_fit(state, speed),
            AppCommand::StepAutoFit => handlers::animation::step_auto_fit(state),

            // === Idle-Monitor ===
            AppCommand::StartIdleMonitor { now } => {
                handlers::interaction::start_idle_monitor(state, now)
            }
            AppCommand::StopIdleMonitor => handlers::interaction::stop_idle_monitor(state),
            AppCommand::PollIdleMonitor { now } => {
                handlers::interaction::poll_idle_monitor(state, now)
            }

            // === View ===
            AppCommand::RequestRedraw => handlers::view::request_redraw(state),
            AppCommand::QueueResize {
                size,
                pixels_per_point,
                now,
            } => handlers::view::queue_resize(state, size, pixels_per_point, now),
            AppCommand::FlushResize { now } => handlers::view::flush_resize(state, now),
            AppCommand::SetLabelSize { size } => handlers::view::set_label_size(state, size),
        }

        Ok(())
    }
}
