//! Zeitgesteuerte Primitive: wiederkehrende Aufgabe und Debouncer.
//!
//! Beide bekommen die aktuelle Zeit von außen (`Instant`), damit Tests ohne
//! echte Wartezeit auskommen. Der Frame-Tick des Hosts treibt das Polling.

use std::time::{Duration, Instant};

/// Wiederkehrende Aufgabe mit fester Periode.
///
/// Solange sie läuft, existiert genau ein ausstehender Fälligkeitszeitpunkt.
#[derive(Debug, Clone)]
pub struct RecurringTask {
    period: Duration,
    next_due: Option<Instant>,
}

impl RecurringTask {
    /// Erstellt eine gestoppte Aufgabe.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Startet (oder startet neu) mit Fälligkeit `now + period`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Bricht die ausstehende Fälligkeit ab.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Ob die Aufgabe geplant ist.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Periode der Aufgabe.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Nächster Fälligkeitszeitpunkt.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Prüft auf Fälligkeit und plant bei Auslösung sofort neu.
    ///
    /// Gibt `true` zurück, wenn die Aufgabe in diesem Aufruf fällig war.
    /// Mehrere verpasste Perioden lösen nur einmal aus.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

/// Fasst schnell aufeinanderfolgende Werte zusammen; nur der letzte zählt.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Erstellt einen leeren Debouncer mit Ruhezeit `quiet`.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Merkt sich `value` und startet die Ruhezeit neu.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Liefert den letzten Wert, sobald die Ruhezeit verstrichen ist.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Ob ein Wert auf Verarbeitung wartet.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
