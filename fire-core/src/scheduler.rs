//! Tick-Scheduler für zeitgesteuerte Teilaufgaben
//!
//! Die Hauptschleife läuft frei; der LED-Strip wird nur alle 250 ms
//! aktualisiert. Statt Wall-Clock-Zugriff in der Logik bekommt jede
//! periodische Aufgabe ein explizites "fällig"-Prädikat gegen eine
//! monotone Millisekunden-Uhr - damit ist das Timing ohne Hardware
//! testbar.

/// Eine periodische Aufgabe mit festem Intervall
///
/// Fällig sobald `now >= last_run + interval`. Der Startwert von
/// `last_run` ist 0, die erste Fälligkeit liegt also ein volles
/// Intervall nach dem (monotonen) Zeit-Nullpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTask {
    interval_ms: u64,
    last_run_ms: u64,
}

impl PeriodicTask {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_ms: 0,
        }
    }

    /// Ist die Aufgabe zum Zeitpunkt `now_ms` fällig?
    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.last_run_ms + self.interval_ms
    }

    /// Markiert die Aufgabe als gelaufen
    ///
    /// Setzt den Anker auf `now_ms` (nicht auf `last_run + interval`):
    /// verspätete Ticks verschieben das Raster nach hinten.
    pub fn mark_ran(&mut self, now_ms: u64) {
        self.last_run_ms = now_ms;
    }

    /// Kombiniert [`is_due`](Self::is_due) und [`mark_ran`](Self::mark_ran)
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.mark_ran(now_ms);
            return true;
        }
        false
    }
}
