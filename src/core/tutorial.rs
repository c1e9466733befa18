//! Schmale Schnittstelle zum Tutorial-Kollaborateur.
//!
//! Das Tutorial hält keine Referenz auf den Controller; es bekommt nur die
//! anzuzeigende Stufe und meldet, ob weitere Eingaben gesperrt werden sollen.

/// Antwort des Tutorials auf einen Schritt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialOutcome {
    /// Stufe wird angezeigt; `lock_input` sperrt alle Aktionen außer "Weiter"
    Shown { lock_input: bool },
    /// Tutorial ist durchlaufen
    Finished,
}

/// Geführte Tour über mehrere Stufen.
pub trait Tutorial {
    /// Anzahl der Stufen (`<= 0` = Tutorial deaktiviert).
    fn steps(&self) -> i32;
    /// Zeigt die Stufe `stage` an.
    fn advance(&mut self, stage: i32) -> TutorialOutcome;
    /// Text der Stufe für das Overlay.
    fn text(&self, _stage: i32) -> Option<&str> {
        None
    }
}

/// Einzelne Tutorial-Stufe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialStep {
    /// Angezeigter Text
    pub text: String,
    /// Sperrt andere Eingaben, solange die Stufe aktiv ist
    pub lock_input: bool,
}

impl TutorialStep {
    /// Erstellt eine Stufe.
    pub fn new(text: impl Into<String>, lock_input: bool) -> Self {
        Self {
            text: text.into(),
            lock_input,
        }
    }
}

/// Tutorial aus einer festen Liste von Stufen
#[derive(Debug, Clone, Default)]
pub struct StepList {
    steps: Vec<TutorialStep>,
}

impl StepList {
    /// Erstellt ein Tutorial aus Stufen.
    pub fn new(steps: Vec<TutorialStep>) -> Self {
        Self { steps }
    }

    /// Tutorial ohne Stufen (deaktiviert).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Standard-Tour durch die Tastenbelegung.
    pub fn default_tour() -> Self {
        Self::new(vec![
            TutorialStep::new("Klick in die Ansicht erzeugt eine neue Form.", true),
            TutorialStep::new("H / V wählen Drehen, Mausrad dreht die Kamera.", false),
            TutorialStep::new("Z wählt Zoom, F passt die Ansicht automatisch ein.", false),
            TutorialStep::new("S wählt Kontrollpunkte, X / Y / C verschieben sie.", false),
            TutorialStep::new("R stellt die Originalform wieder her, D wechselt die Darstellung.", false),
        ])
    }
}

impl Tutorial for StepList {
    fn steps(&self) -> i32 {
        i32::try_from(self.steps.len()).unwrap_or(i32::MAX)
    }

    fn advance(&mut self, stage: i32) -> TutorialOutcome {
        match usize::try_from(stage).ok().and_then(|i| self.steps.get(i)) {
            Some(step) => {
                log::info!("Tutorial-Stufe {}: {}", stage, step.text);
                TutorialOutcome::Shown {
                    lock_input: step.lock_input,
                }
            }
            None => TutorialOutcome::Finished,
        }
    }

    fn text(&self, stage: i32) -> Option<&str> {
        usize::try_from(stage)
            .ok()
            .and_then(|i| self.steps.get(i))
            .map(|step| step.text.as_str())
    }
}
