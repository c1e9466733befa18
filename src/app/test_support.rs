//! Test-Doubles für Use-Case- und Mapping-Tests.

use super::AppState;
use crate::core::{Axis, OrbitCamera, StepList, Surface, TweenEvent};
use crate::shared::ViewerOptions;
use glam::{DMat4, DVec3};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Gemeinsames Protokoll der Flächen-Aufrufe.
pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

/// Fläche mit steuerbarer Geometrie und vorgegebenen Tween-Meldungen.
pub(crate) struct FakeSurface {
    pub calls: CallLog,
    pub controls: bool,
    pub point: DVec3,
    pub index: i32,
    /// Inverse View-Projection und halbe Kantenlänge in NDC für ein bildschirmparalleles Quadrat
    pub screen_square: Option<(DMat4, f64)>,
    pub events: VecDeque<TweenEvent>,
}

impl FakeSurface {
    pub fn new() -> (Self, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let surface = Self {
            calls: Rc::clone(&calls),
            controls: false,
            point: DVec3::new(0.1, 0.2, 0.3),
            index: 0,
            screen_square: None,
            events: VecDeque::new(),
        };
        (surface, calls)
    }

    /// Fläche, die mit der Startkamera als Quadrat mit `half_extent` in NDC erscheint.
    pub fn screen_square(half_extent: f64) -> (Self, CallLog) {
        let (mut surface, calls) = Self::new();
        let inverse = OrbitCamera::new().view_projection().inverse();
        surface.screen_square = Some((inverse, half_extent));
        (surface, calls)
    }

    fn log(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl Surface for FakeSurface {
    fn init(&mut self) {
        self.log("init");
        self.controls = false;
    }

    fn has_controls(&self) -> bool {
        self.controls
    }

    fn activate_controls(&mut self) {
        self.log("activate_controls");
        self.controls = true;
    }

    fn deactivate_controls(&mut self) {
        self.log("deactivate_controls");
        self.controls = false;
    }

    fn set_axis(&mut self, axis: Option<Axis>) {
        self.log(format!("set_axis({axis:?})"));
    }

    fn set_active_control_point_index(&mut self, delta: i32) {
        self.log(format!("set_index({delta})"));
        self.index += delta;
    }

    fn active_control_point(&self) -> Option<DVec3> {
        self.controls.then_some(self.point)
    }

    fn set_active_control_point(&mut self, point: DVec3, axis: Axis) {
        self.log(format!("set_point({axis:?})"));
        self.point = point;
    }

    fn update(&mut self) {
        self.log("update");
    }

    fn patch(&self, u: f64, v: f64) -> DVec3 {
        match self.screen_square {
            Some((inverse, half)) => inverse.project_point3(DVec3::new(
                (2.0 * u - 1.0) * half,
                (2.0 * v - 1.0) * half,
                0.5,
            )),
            None => DVec3::new(u - 0.5, v - 0.5, 0.0),
        }
    }

    fn randomize(&mut self, _duration: Duration) {
        self.log("randomize");
    }

    fn randomize_close_to_original(&mut self, _duration: Duration) {
        self.log("randomize_close_to_original");
    }

    fn restore(&mut self, _duration: Duration) {
        self.log("restore");
    }

    fn stop(&mut self) {
        self.log("stop");
    }

    fn next_display(&mut self) {
        self.log("next_display");
    }

    fn advance(&mut self, _dt: Duration) -> Option<TweenEvent> {
        self.events.pop_front()
    }
}

/// AppState mit Fake-Fläche und deaktiviertem Tutorial.
pub(crate) fn state_with(surface: FakeSurface) -> AppState {
    AppState::new(
        Box::new(surface),
        Box::new(StepList::disabled()),
        ViewerOptions::default(),
    )
}

/// Löscht das Aufruf-Protokoll (z.B. nach `init` im Konstruktor).
pub(crate) fn clear(calls: &CallLog) {
    calls.borrow_mut().clear();
}

/// Kopie des Aufruf-Protokolls.
pub(crate) fn calls(calls: &CallLog) -> Vec<String> {
    calls.borrow().clone()
}
