//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{Action, AppCommand, AppIntent, AppState};
use std::time::Instant;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::KeyPressed { key, now } => match state.bindings.resolve(&key) {
            Some(action) => map_key(state, action, now),
            None => vec![],
        },
        AppIntent::WheelScrolled { delta_y, now } => map_wheel(state, delta_y, now),
        AppIntent::ViewportClicked { now } => vec![
            AppCommand::RegisterInteraction { now },
            AppCommand::StartRandomize,
            AppCommand::RequestRedraw,
        ],
        AppIntent::ViewportResized {
            size,
            pixels_per_point,
            now,
        } => vec![AppCommand::QueueResize {
            size,
            pixels_per_point,
            now,
        }],
        AppIntent::LabelMeasured { size } => vec![AppCommand::SetLabelSize { size }],
        // Auto-Fit vor der Animation: ein im selben Frame gestarteter Fit
        // hat seine erste Iteration bereits ausgeführt.
        AppIntent::FrameTick { now, dt } => vec![
            AppCommand::StepAutoFit,
            AppCommand::AdvanceSurfaceAnimation { dt },
            AppCommand::PollIdleMonitor { now },
            AppCommand::FlushResize { now },
        ],
        AppIntent::ViewActivated { now } => vec![
            AppCommand::StartIdleMonitor { now },
            AppCommand::RequestRedraw,
        ],
        AppIntent::ViewDeactivated => vec![AppCommand::StopIdleMonitor],
    }
}

fn map_key(state: &AppState, action: Action, now: Instant) -> Vec<AppCommand> {
    let mut commands = vec![AppCommand::RegisterInteraction { now }];

    if state.interaction.input_locked && action != Action::AdvanceTutorial {
        return commands;
    }

    match action {
        Action::AdvanceTutorial => {
            commands.push(AppCommand::AdvanceTutorial);
            commands.push(AppCommand::RequestRedraw);
            return commands;
        }
        Action::Reload => {
            commands.push(AppCommand::ReloadSession { now });
            return commands;
        }
        _ => {}
    }

    commands.push(AppCommand::SuspendTutorial);

    if state.interaction.current_action == Some(action) {
        commands.push(AppCommand::SetCurrentAction { action: None });
        commands.push(AppCommand::HideCoordinates);
        commands.push(AppCommand::DeactivatePointControls);
    } else {
        commands.push(AppCommand::SetCurrentAction {
            action: Some(action),
        });
        commands.extend(immediate_effect(state, action));
    }

    commands.push(AppCommand::RequestRedraw);
    commands
}

/// Sofortwirkung beim Auswählen einer Aktion.
fn immediate_effect(state: &AppState, action: Action) -> Option<AppCommand> {
    match action {
        Action::Morph => Some(AppCommand::StartRandomize),
        Action::ZoomToFit => Some(AppCommand::StartAutoFit {
            speed: state.options.zoom_to_fit_speed,
        }),
        Action::SelectPoint | Action::MoveX | Action::MoveY | Action::MoveZ => {
            Some(AppCommand::ActivatePointControls {
                axis: action.axis(),
            })
        }
        Action::Restore => Some(AppCommand::RestoreSurface),
        Action::CycleDisplay => Some(AppCommand::CycleDisplay),
        Action::RotateHorizontal
        | Action::RotateVertical
        | Action::Zoom
        | Action::AdvanceTutorial
        | Action::Reload => None,
    }
}

fn map_wheel(state: &AppState, delta_y: f64, now: Instant) -> Vec<AppCommand> {
    let mut commands = vec![AppCommand::RegisterInteraction { now }];
    if state.interaction.input_locked {
        return commands;
    }

    let action = state
        .interaction
        .current_action
        .filter(|action| action.continuous_handler().is_some());
    if let Some(action) = action {
        commands.push(AppCommand::ApplyActionDelta {
            action,
            delta: -delta_y,
        });
        commands.push(AppCommand::RequestRedraw);
    }
    commands
}
