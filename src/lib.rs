//! Surface Viewport Library.
//! Kamera-, Interaktions- und Animationslogik als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{Action, AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    Axis, BezierPatch, DisplayMode, OrbitCamera, StepList, Surface, Tutorial, TutorialOutcome,
    TweenEvent,
};
pub use shared::ViewerOptions;
