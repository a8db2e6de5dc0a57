//! Anwendungszustand der Hauptschleife
//!
//! Statt globaler Variablen hält ein explizites Zustands-Struct beide
//! Scroll-Zähler und das einmal berechnete Text-Rechteck. Die Schleife
//! bekommt den Zustand per Referenz - deterministisch testbar.

use embedded_graphics::primitives::Rectangle;

/// Zustand der Animations-Schleife
///
/// Beide Zähler laufen frei hoch (wrapping); das Modulo gegen
/// Display- bzw. Strip-Dimension passiert erst bei der Verwendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    /// Vertikaler Scroll-Offset der Farbbänder (pro Frame +1)
    pub color_offset: u32,
    /// Chase-Offset des LED-Strips (pro 250-ms-Tick +1)
    pub led_strip_offset: u32,
    /// Beim Start aus den Font-Metriken berechnet, danach konstant
    pub text_rect: Rectangle,
}

impl AppState {
    pub const fn new(text_rect: Rectangle) -> Self {
        Self {
            color_offset: 0,
            led_strip_offset: 0,
            text_rect,
        }
    }

    /// Ein Display-Frame ist gezeichnet
    pub fn advance_frame(&mut self) {
        self.color_offset = self.color_offset.wrapping_add(1);
    }

    /// Ein Strip-Tick ist übertragen
    pub fn advance_strip(&mut self) {
        self.led_strip_offset = self.led_strip_offset.wrapping_add(1);
    }
}
