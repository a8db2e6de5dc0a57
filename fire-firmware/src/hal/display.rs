// ILI9342C Display-Initialisierung über den geteilten VSPI-Bus
//
// Das LCD muss als erstes Gerät auf dem Bus initialisiert werden
// (es setzt die Pin-Zuordnung des Busses); danach der Selbsttest
// mit den konzentrischen Rechtecken.

use core::cell::RefCell;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal_bus::spi::RefCellDevice;
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;
use esp_hal::spi::master::Spi;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9342CRgb565;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::{Builder, Display};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use fire_core::band_color;

/// Der geteilte VSPI-Bus (LCD + SD-Karte, jeweils eigener CS)
pub type SharedSpiBus = RefCell<Spi<'static, Blocking>>;

/// SPI-Device-Sicht eines Bus-Teilnehmers
pub type SpiDev = RefCellDevice<'static, Spi<'static, Blocking>, Output<'static>, Delay>;

/// Konkreter Display-Typ des M5Stack Fire
pub type FireDisplay = Display<SpiInterface<'static, SpiDev, Output<'static>>, ILI9342CRgb565, Output<'static>>;

/// Puffergröße für das SPI-Interface des Displays
pub const DI_BUFFER_SIZE: usize = 512;

/// Initialisiert den ILI9342C-Controller
///
/// Der ILI9342C des Fire erwartet BGR-Reihenfolge und invertierte
/// Farben; Default-Orientierung ist bereits 320x240 Landscape.
pub fn init_display(
    spi_device: SpiDev,
    dc: Output<'static>,
    rst: Output<'static>,
    buffer: &'static mut [u8; DI_BUFFER_SIZE],
    delay: &mut Delay,
) -> FireDisplay {
    let di = SpiInterface::new(spi_device, dc, buffer);
    Builder::new(ILI9342CRgb565, di)
        .reset_pin(rst)
        .display_size(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16)
        .color_order(ColorOrder::Bgr)
        .invert_colors(ColorInversion::Inverted)
        .init(delay)
        .unwrap()
}

/// Visueller Selbsttest nach der Controller-Initialisierung
///
/// Lila Hintergrund, zentriertes 64x64-Rechteck in Weiß, darin ein
/// 48x48-Rechteck wieder in Lila. Das Schwarz-Löschen passiert erst
/// am Ende der gesamten Peripherie-Initialisierung.
pub fn self_test<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = display.bounding_box();
    let purple = band_color(5);

    display.fill_solid(&bounds, purple)?;
    let center = bounds.center();
    display.fill_solid(&Rectangle::with_center(center, Size::new(64, 64)), Rgb565::WHITE)?;
    display.fill_solid(&Rectangle::with_center(center, Size::new(48, 48)), purple)?;
    Ok(())
}
