//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod animation;
pub mod editing;
pub mod interaction;
pub mod view;
