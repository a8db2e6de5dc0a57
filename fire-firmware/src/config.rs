// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Board-Profil
// ============================================================================

/// Feste Pin-Belegung eines Boards
///
/// Deklarative Tabelle statt verstreuter Konstanten: zum Portieren auf ein
/// anderes Board wird nur dieses Profil getauscht. Zur Laufzeit ist nichts
/// konfigurierbar; die typisierten Peripherals in `main.rs` folgen exakt
/// dieser Tabelle.
pub struct BoardPins {
    // SPI-Bus (VSPI) - LCD und SD-Karte teilen sich den Bus
    pub spi_mosi: u8,
    pub spi_miso: u8,
    pub spi_sck: u8,
    // LCD (ILI9342C)
    pub lcd_cs: u8,
    pub lcd_dc: u8,
    pub lcd_rst: u8,
    pub lcd_bl: u8,
    // SD-Karte
    pub sd_cs: u8,
    // WS2812 LED-Strip (Seiten-LEDs)
    pub led_data: u8,
    // Die drei Face-Buttons (active-low, externe Pull-Ups auf dem Board)
    pub button_a: u8,
    pub button_b: u8,
    pub button_c: u8,
    // I2C-Bus (MPU6886 IMU)
    pub i2c_sda: u8,
    pub i2c_scl: u8,
}

/// Pinout des M5Stack Fire
pub const M5STACK_FIRE: BoardPins = BoardPins {
    spi_mosi: 23,
    spi_miso: 19,
    spi_sck: 18,
    lcd_cs: 14,
    lcd_dc: 27,
    lcd_rst: 33,
    lcd_bl: 32,
    sd_cs: 4,
    led_data: 15,
    button_a: 39,
    button_b: 38,
    button_c: 37,
    i2c_sda: 21,
    i2c_scl: 22,
};

// ============================================================================
// Display Konfiguration
// ============================================================================

/// Display-Breite in Pixeln (Landscape)
pub const DISPLAY_WIDTH: u32 = 320;

/// Display-Höhe in Pixeln
pub const DISPLAY_HEIGHT: u32 = 240;

/// SPI-Taktfrequenz für das LCD in MHz
pub const SPI_FREQ_MHZ: u32 = 40;

/// Frame-Pause in Millisekunden
///
/// Jede Iteration gibt kurz an den Executor ab; neu gezeichnet wird
/// trotzdem jede Iteration.
pub const FRAME_INTERVAL_MS: u64 = 20;

/// Der feste Text, der zentriert über die Bänder gestempelt wird
pub const DEMO_TEXT: &str = "gay!";

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Anzahl der LEDs im Strip (2x5 Seiten-LEDs des Fire)
pub const LED_COUNT: usize = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Chase-Intervall in Millisekunden (monotone Uhr, nicht pro Iteration)
pub const STRIP_INTERVAL_MS: u64 = 250;

// ============================================================================
// Speicher Konfiguration
// ============================================================================

/// Heap-Größe im internen RAM (Bytes)
///
/// Bewusst klein: der Framebuffer (320*240*2 = 150 KB) passt hier nicht
/// hinein und landet damit sicher im PSRAM-Heap.
pub const INTERNAL_HEAP_SIZE: usize = 32768; // 32 KB

/// Schlaf-Intervall der fatalen Halt-Schleife in Sekunden
pub const HALT_SLEEP_SECS: u64 = 10;
