//! Begrenztes Command-Log für Tests und Fehlersuche.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Jüngster Command, der nicht vom Frame-Takt stammt (für die Status-Bar).
    pub fn last_significant(&self) -> Option<&AppCommand> {
        self.entries.iter().rev().find(|command| {
            !matches!(
                command,
                AppCommand::StepAutoFit
                    | AppCommand::AdvanceSurfaceAnimation { .. }
                    | AppCommand::PollIdleMonitor { .. }
                    | AppCommand::FlushResize { .. }
                    | AppCommand::RequestRedraw
            )
        })
    }
}
