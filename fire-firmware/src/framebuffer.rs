// Off-Screen Framebuffer im PSRAM
//
// Ein zusammenhängender Rgb565-Puffer in Display-Größe. Er wird einmal
// beim Start allokiert (fallible - der einzige fatale Fehlerpfad des
// Demos), pro Frame komplett komponiert und dann in einer Operation
// auf das Display übertragen.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub struct FrameBuffer {
    size: Size,
    data: Vec<Rgb565>,
}

impl FrameBuffer {
    /// Allokiert den Puffer aus dem Heap (PSRAM)
    ///
    /// Gibt `None` zurück wenn der Speicher nicht reicht - der Aufrufer
    /// entscheidet über den fatalen Halt, hier wird nicht gepanict.
    pub fn try_new(size: Size) -> Option<Self> {
        let len = (size.width * size.height) as usize;
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            return None;
        }
        data.resize(len, Rgb565::BLACK);
        Some(Self { size, data })
    }

    /// Pixel in Zeilen-Reihenfolge, für den Blit aufs Display
    pub fn data(&self) -> &[Rgb565] {
        &self.data
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.x < w && point.y >= 0 && point.y < h {
                self.data[(point.y * w + point.x) as usize] = color;
            }
        }
        Ok(())
    }

    // Zeilenweises fill statt Pixel-Iteration: die Bänder sind
    // Vollbreiten-Rechtecke, das ist der heiße Pfad der Komposition.
    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        let w = self.size.width as usize;
        let x0 = area.top_left.x as usize;
        let x1 = x0 + area.size.width as usize;
        let y0 = area.top_left.y as usize;
        for y in y0..y0 + area.size.height as usize {
            self.data[y * w + x0..y * w + x1].fill(color);
        }
        Ok(())
    }
}
