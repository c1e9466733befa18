//! Use-Cases der Application-Layer-Orchestrierung.

pub mod auto_fit;
pub mod camera;
pub mod control_point;
pub mod idle;
pub mod interaction;
pub mod label;
pub mod session;
pub mod surface_animation;
pub mod tutorial;
pub mod view;
pub mod viewport;
