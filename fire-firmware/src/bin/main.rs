// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (Framebuffer liegt im PSRAM-Heap)
extern crate alloc;

use core::cell::RefCell;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// Zeichen-Primitives
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal_bus::spi::RefCellDevice;

// ESP32 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::spi::Mode as SpiMode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{Debug2Format, error, info, warn};

use profont::PROFONT_24_POINT;

// Projekt-Module und Konfiguration
use fire_core::{AppState, centered_text_rect, measure_text};
use m5fire_demo::config::{
    DEMO_TEXT, DISPLAY_HEIGHT, DISPLAY_WIDTH, HALT_SLEEP_SECS, INTERNAL_HEAP_SIZE, RMT_CLOCK_MHZ,
    SPI_FREQ_MHZ,
};
use m5fire_demo::framebuffer::FrameBuffer;
use m5fire_demo::hal::display::{self, DI_BUFFER_SIZE, FireDisplay, SharedSpiBus};
use m5fire_demo::hal::imu::Mpu6886;
use m5fire_demo::hal::sdcard;
use m5fire_demo::hal::strip_writer::STRIP_BUFFER_SIZE;
use m5fire_demo::hal::RmtStripWriter;
use m5fire_demo::tasks::animation_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert die Peripherie in strikter Reihenfolge (geteilter
/// VSPI-Bus!), allokiert den Framebuffer aus dem PSRAM und spawnt den
/// Animations-Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32 Konfiguration: CPU auf maximale Taktfrequenz (240 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren: kleiner interner Heap plus der
    // komplette PSRAM-Bereich. Der Framebuffer (150 KB) passt nur ins
    // PSRAM - siehe INTERNAL_HEAP_SIZE.
    esp_alloc::heap_allocator!(size: INTERNAL_HEAP_SIZE);
    esp_alloc::psram_allocator!(peripherals.PSRAM, esp_hal::psram);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Serial-Log läuft ab hier (defmt via esp-println)
    info!("M5Stack Fire demo starting");

    let mut delay = Delay::new();

    // Geteilter VSPI-Bus: LCD und SD-Karte, jeweils eigener Chip-Select.
    // Pin-Zuordnung siehe config::M5STACK_FIRE.
    let spi = Spi::new(
        peripherals.SPI3,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(SPI_FREQ_MHZ))
            .with_mode(SpiMode::_0),
    )
    .unwrap()
    .with_sck(peripherals.GPIO18)
    .with_mosi(peripherals.GPIO23)
    .with_miso(peripherals.GPIO19);

    static SPI_BUS: static_cell::StaticCell<SharedSpiBus> = static_cell::StaticCell::new();
    let spi_bus = &*SPI_BUS.init(RefCell::new(spi));

    // 1. SD-Karte mounten (best-effort; das Dateisystem wird danach
    //    nicht weiter benutzt)
    let sd_cs = Output::new(peripherals.GPIO4, Level::High, OutputConfig::default());
    let sd_spi = RefCellDevice::new(spi_bus, sd_cs, delay.clone()).unwrap();
    match sdcard::mount(sd_spi, delay.clone()) {
        Ok(bytes) => info!("SD card mounted: {} bytes", bytes),
        Err(e) => warn!("SD card mount failed (ignored): {}", Debug2Format(&e)),
    }

    // 2. Display: das LCD initialisiert als erstes Gerät die Bus-Pins
    let lcd_cs = Output::new(peripherals.GPIO14, Level::High, OutputConfig::default());
    let lcd_dc = Output::new(peripherals.GPIO27, Level::Low, OutputConfig::default());
    let lcd_rst = Output::new(peripherals.GPIO33, Level::High, OutputConfig::default());
    // Backlight direkt an, das Panel bleibt sonst dunkel
    let _lcd_bl = Output::new(peripherals.GPIO32, Level::High, OutputConfig::default());

    let lcd_spi = RefCellDevice::new(spi_bus, lcd_cs, delay.clone()).unwrap();
    static DI_BUFFER: static_cell::StaticCell<[u8; DI_BUFFER_SIZE]> =
        static_cell::StaticCell::new();
    let di_buffer = DI_BUFFER.init([0; DI_BUFFER_SIZE]);

    static DISPLAY: static_cell::StaticCell<FireDisplay> = static_cell::StaticCell::new();
    let display = DISPLAY.init(display::init_display(
        lcd_spi, lcd_dc, lcd_rst, di_buffer, &mut delay,
    ));

    // 3. Visueller Selbsttest (lila Fläche, konzentrische Rechtecke)
    if display::self_test(display).is_err() {
        warn!("Display self-test failed (ignored)");
    }

    // 4. LED-Strip am RMT Peripheral; der Adapter konfiguriert den
    //    Daten-Pin (GPIO15) gleich mit
    static RMT_BUFFER: static_cell::StaticCell<[esp_hal::rmt::PulseCode; STRIP_BUFFER_SIZE]> =
        static_cell::StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init(smart_led_buffer!(10));
    let strip = RmtStripWriter::new(
        peripherals.GPIO15,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        rmt_buffer,
    );

    // 5. Die drei Face-Buttons (initialisiert, vom Demo-Loop nicht
    //    gelesen; active-low, Pull-Ups sitzen auf dem Board)
    let button_cfg = InputConfig::default().with_pull(Pull::None);
    let _button_a = Input::new(peripherals.GPIO39, button_cfg);
    let _button_b = Input::new(peripherals.GPIO38, button_cfg);
    let _button_c = Input::new(peripherals.GPIO37, button_cfg);

    // 6. IMU aufwecken (best-effort, wird nicht ausgelesen)
    let i2c = I2c::new(peripherals.I2C0, I2cConfig::default())
        .unwrap()
        .with_sda(peripherals.GPIO21)
        .with_scl(peripherals.GPIO22);
    let mut imu = Mpu6886::new(i2c);
    match imu.init() {
        Ok(()) => info!("MPU6886 awake"),
        Err(e) => warn!("IMU init failed (ignored): {}", Debug2Format(&e)),
    }

    // Initialisierung abgeschlossen: Display schwarz löschen
    if display.clear(Rgb565::BLACK).is_err() {
        warn!("Display clear failed (ignored)");
    }

    // Framebuffer aus dem PSRAM - der einzige fatale Fehlerpfad des
    // Demos. Vor dem ersten gezeichneten Frame, wie spezifiziert.
    let Some(frame) = FrameBuffer::try_new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)) else {
        error!("Out of memory.");
        loop {
            Timer::after(Duration::from_secs(HALT_SLEEP_SECS)).await;
        }
    };
    static FRAME: static_cell::StaticCell<FrameBuffer> = static_cell::StaticCell::new();
    let frame = FRAME.init(frame);

    // Text-Layout einmal aus den Font-Metriken berechnen und cachen
    let text_size = measure_text(
        DEMO_TEXT.len() as u32,
        PROFONT_24_POINT.character_size,
        PROFONT_24_POINT.character_spacing,
    );
    let text_rect = centered_text_rect(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT), text_size);
    let state = AppState::new(text_rect);

    // Spawn Animations-Task
    spawner
        .spawn(animation_task(display, frame, strip, state))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
