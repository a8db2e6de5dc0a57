// Strip Writer Trait-Implementierung für den WS2812-Strip
//
// Abstrahiert den Zugriff auf die 10 Seiten-LEDs des M5Stack Fire
// um Tests mit Mock-Implementierungen zu ermöglichen. Der Trait selbst
// lebt in fire-core.

use rgb::RGB8;

pub use fire_core::{StripError, StripWriter};

use crate::config::LED_COUNT;

// Buffer-Größe für den Strip (3 Farben * 8 Bits pro LED + 1 Reset)
pub const STRIP_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// Real Hardware Implementation (nur für ESP32-Target)
// ============================================================================

#[cfg(not(test))]
mod real_impl {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::rmt::Rmt;
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use smart_leds_trait::SmartLedsWrite;

    /// Real Hardware Strip Writer
    ///
    /// Nutzt ESP32 RMT Peripheral um die WS2812-Kette anzusteuern.
    /// Ein `write` überträgt den kompletten Strip in einer RMT-Transmission;
    /// eine halb aktualisierte Kette ist dadurch nicht beobachtbar.
    ///
    /// Hinweis: Der Buffer muss 'static sein, daher wird er in main per
    /// StaticCell erstellt und als Parameter übergeben statt im Constructor
    /// allokiert.
    pub struct RmtStripWriter<'a> {
        strip: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
    }

    impl<'a> RmtStripWriter<'a> {
        /// Erstellt einen neuen RmtStripWriter
        ///
        /// # Parameter
        /// - `led_pin`: GPIO15 Peripheral für die Strip-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
        pub fn new(
            led_pin: esp_hal::peripherals::GPIO15<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            buffer: &'a mut [esp_hal::rmt::PulseCode; STRIP_BUFFER_SIZE],
        ) -> Self {
            // RMT initialisieren
            let rmt: Rmt<'a, Blocking> =
                Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

            // SmartLED Adapter erstellen
            let strip = SmartLedsAdapter::new(rmt.channel0, led_pin, buffer);

            Self { strip }
        }
    }

    impl<'a> StripWriter for RmtStripWriter<'a> {
        fn write(&mut self, colors: &[RGB8]) -> Result<(), StripError> {
            self.strip
                .write(colors.iter().copied())
                .map_err(|_| StripError::WriteFailed)
        }
    }
}

#[cfg(not(test))]
pub use real_impl::RmtStripWriter;

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

#[cfg(test)]
pub struct MockStripWriter {
    /// Zuletzt geschriebener Frame (für Assertions in Tests)
    pub last_frame: Option<[RGB8; LED_COUNT]>,
    /// Anzahl der write() Aufrufe
    pub write_count: usize,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
}

#[cfg(test)]
impl MockStripWriter {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            write_count: 0,
            fail_next_write: false,
        }
    }
}

#[cfg(test)]
impl StripWriter for MockStripWriter {
    fn write(&mut self, colors: &[RGB8]) -> Result<(), StripError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StripError::WriteFailed);
        }

        let mut frame = [RGB8::default(); LED_COUNT];
        frame[..colors.len()].copy_from_slice(colors);
        self.last_frame = Some(frame);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
