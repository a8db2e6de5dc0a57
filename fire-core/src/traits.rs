//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für Strip-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    WriteFailed,
}

/// Trait für den adressierbaren LED-Strip (WS2812/Neopixel)
///
/// Ein `write` überträgt IMMER den kompletten Strip in einer
/// Transmission - der Strip ist nie halb aktualisiert sichtbar.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStripWriter (in-memory Mock)
pub trait StripWriter: Send {
    /// Überträgt einen kompletten Frame auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `StripError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, colors: &[RGB8]) -> Result<(), StripError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for StripError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StripError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
