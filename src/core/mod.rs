//! Core-Domänentypen: Orbit-Kamera, Flächen-Schnittstelle, Auto-Fit, Label-Platzierung.

pub mod auto_fit;
pub mod bezier_patch;
pub mod camera;
pub mod easing;
pub mod label;
pub mod surface;
pub mod tutorial;

pub use auto_fit::{FitDecision, FitProbe};
pub use bezier_patch::BezierPatch;
pub use camera::OrbitCamera;
pub use label::LabelLayout;
pub use surface::{Axis, DisplayMode, Surface, TweenEvent};
pub use tutorial::{StepList, Tutorial, TutorialOutcome, TutorialStep};
