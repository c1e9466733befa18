//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod actions;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod scheduler;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kamera, Interaktion, Animationen).
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod use_cases;

pub use actions::{Action, ActionBindings, ContinuousHandler};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scheduler::{Debouncer, RecurringTask};
pub use state::{
    ActiveTween, AnimationState, AppState, AutoFitJob, InteractionState, TweenKind, ViewState,
};
