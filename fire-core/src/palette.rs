//! Farbpalette des Demos
//!
//! Sechs feste Farben (Web-Farbwerte), über die Prozess-Lebenszeit
//! unveränderlich. Die LCD-Seite nutzt Rgb565, der LED-Strip RGB8.

use embedded_graphics::pixelcolor::Rgb565;
use rgb::RGB8;

/// Anzahl der Palettenfarben
pub const PALETTE_LEN: usize = 6;

// Basiswerte als 8-Bit-RGB-Tripel (Rot, Orange, Gelb, Grün, Blau, Lila)
const PALETTE_RGB: [(u8, u8, u8); PALETTE_LEN] = [
    (255, 0, 0),
    (255, 165, 0),
    (255, 255, 0),
    (0, 128, 0),
    (0, 0, 255),
    (128, 0, 128),
];

/// Palettenfarbe für die LCD-Bänder (Rgb565)
///
/// Der Index wird modulo [`PALETTE_LEN`] genommen.
pub fn band_color(index: usize) -> Rgb565 {
    let (r, g, b) = PALETTE_RGB[index % PALETTE_LEN];
    // Rgb565: 5 Bit Rot, 6 Bit Grün, 5 Bit Blau
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Palettenfarbe für den LED-Strip (RGB8)
///
/// Der Index wird modulo [`PALETTE_LEN`] genommen.
pub fn strip_color(index: usize) -> RGB8 {
    let (r, g, b) = PALETTE_RGB[index % PALETTE_LEN];
    RGB8 { r, g, b }
}
