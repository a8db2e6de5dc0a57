//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!): Band-Geometrie
//! für das scrollende LCD-Muster, der LED-Chase und das Text-Layout.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use rgb::RGB8;

use crate::palette::{PALETTE_LEN, band_color, strip_color};

/// Rechtecke eines Farbbands im Framebuffer
///
/// Band `index` beginnt bei Zeile `(offset + index * band_height) % height`
/// und ist `band_height = height / PALETTE_LEN` Zeilen hoch. Der Umbruch am
/// unteren Rand ist reines Modulo auf der Band-Startkoordinate, KEINE echte
/// Rotation: die Farbzuordnung Band → Palette bleibt fix, Band 0 ist immer
/// die erste Palettenfarbe (gewollte Darstellungs-Eigenart, nicht ändern).
///
/// Ein Band, das den unteren Rand kreuzt, wird als zwei Rechtecke geliefert
/// (Rest oben am Bildschirmanfang).
pub fn band_rects(screen: Size, offset: u32, index: usize) -> (Rectangle, Option<Rectangle>) {
    let band_height = screen.height / PALETTE_LEN as u32;
    let top = (offset + index as u32 * band_height) % screen.height;

    if top + band_height <= screen.height {
        (
            Rectangle::new(
                Point::new(0, top as i32),
                Size::new(screen.width, band_height),
            ),
            None,
        )
    } else {
        let lower = screen.height - top;
        (
            Rectangle::new(Point::new(0, top as i32), Size::new(screen.width, lower)),
            Some(Rectangle::new(
                Point::zero(),
                Size::new(screen.width, band_height - lower),
            )),
        )
    }
}

/// Komponiert einen kompletten Frame aus `PALETTE_LEN` Farbbändern
///
/// Die Bänder werden in Palettenreihenfolge gezeichnet und kacheln den
/// gesamten Zielbereich lückenlos.
pub fn compose_bands<D>(target: &mut D, offset: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let screen = target.bounding_box().size;
    for index in 0..PALETTE_LEN {
        let color = band_color(index);
        let (rect, wrapped) = band_rects(screen, offset, index);
        target.fill_solid(&rect, color)?;
        if let Some(rest) = wrapped {
            target.fill_solid(&rest, color)?;
        }
    }
    Ok(())
}

/// Füllt den LED-Puffer mit dem Chase-Muster
///
/// LED `i` bekommt die Palettenfarbe `(offset + i) % PALETTE_LEN`.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use fire_core::{fill_chase, strip_color};
/// let mut leds = [RGB8::default(); 10];
/// fill_chase(0, &mut leds);
/// assert_eq!(leds[0], strip_color(0));
/// assert_eq!(leds[6], strip_color(0)); // 6 % 6 == 0
/// fill_chase(1, &mut leds);
/// assert_eq!(leds[0], strip_color(1));
/// ```
pub fn fill_chase(offset: u32, leds: &mut [RGB8]) {
    for (i, led) in leds.iter_mut().enumerate() {
        *led = strip_color(offset as usize + i);
    }
}

/// Misst den Text-Block einer Monospace-Schrift
///
/// `glyph` ist die Zeichenzelle der Schrift, `spacing` der Abstand
/// zwischen zwei Zeichen.
pub fn measure_text(len: u32, glyph: Size, spacing: u32) -> Size {
    if len == 0 {
        return Size::new(0, glyph.height);
    }
    Size::new(len * glyph.width + (len - 1) * spacing, glyph.height)
}

/// Zentriert einen gemessenen Text-Block auf dem Bildschirm
///
/// Wird einmal beim Start berechnet und danach unverändert wiederverwendet;
/// bei Überbreite wird die linke Kante negativ (signiertes Zentrieren).
pub fn centered_text_rect(screen: Size, text: Size) -> Rectangle {
    let x = (screen.width as i32 - text.width as i32) / 2;
    let y = (screen.height as i32 - text.height as i32) / 2;
    Rectangle::new(Point::new(x, y), text)
}
