// Animations-Task - scrollende Farbbänder auf dem LCD plus LED-Chase
use defmt::{error, info};
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_24_POINT;
use rgb::RGB8;

use crate::config::{DEMO_TEXT, FRAME_INTERVAL_MS, LED_COUNT, STRIP_INTERVAL_MS};
use crate::framebuffer::FrameBuffer;
use crate::hal::display::FireDisplay;
use crate::hal::{RmtStripWriter, StripWriter};
use fire_core::{AppState, PeriodicTask, compose_bands, fill_chase};

/// Animations-Logic - Testbare Loop ohne Hardware-Abhängigkeit am Strip
///
/// Pro Iteration: Bänder in den Framebuffer komponieren, Text stempeln,
/// kompletten Puffer aufs Display blitten. Der Strip wird nur bearbeitet
/// wenn der 250-ms-Tick fällig ist (monotone Uhr, nicht Iterationszähler);
/// ein Tick überträgt alle 10 Farben in EINEM write.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: StripWriter` ermöglicht:
/// - Real Hardware (RmtStripWriter) im Production-Code
/// - Mock Implementation (MockStripWriter) in Tests
pub async fn animation_logic<D, S>(
    display: &mut D,
    frame: &mut FrameBuffer,
    mut strip: S,
    mut state: AppState,
) where
    D: DrawTarget<Color = Rgb565>,
    S: StripWriter,
{
    let mut strip_tick = PeriodicTask::new(STRIP_INTERVAL_MS);
    let mut strip_colors = [RGB8::default(); LED_COUNT];
    let text_style = MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::BLACK);
    let screen = Rectangle::new(Point::zero(), frame.size());

    info!("Animation loop started");

    loop {
        // Frame komponieren; der FrameBuffer zeichnet Infallible
        let _ = compose_bands(frame, state.color_offset);
        let _ = Text::with_baseline(
            DEMO_TEXT,
            state.text_rect.top_left,
            text_style,
            Baseline::Top,
        )
        .draw(frame);

        // Kompletter Blit in einer Operation, keine Dirty-Rectangles
        if display
            .fill_contiguous(&screen, frame.data().iter().copied())
            .is_err()
        {
            error!("Failed to blit frame to display");
        }

        let now = Instant::now().as_millis();
        if strip_tick.poll(now) {
            fill_chase(state.led_strip_offset, &mut strip_colors);
            if strip.write(&strip_colors).is_err() {
                error!("Failed to write to LED strip");
            }
            state.advance_strip();
        }

        state.advance_frame();

        // Async Delay: gibt CPU an den Executor zurück
        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }
}

/// Animations-Task - Embassy Task für die Hauptschleife
///
/// Die gesamte Hardware (Display, Framebuffer, Strip) ist beim Spawn
/// bereits initialisiert - die strikte Init-Reihenfolge auf dem geteilten
/// Bus liegt komplett in `main`. Hier läuft nur noch die Loop.
#[embassy_executor::task]
pub async fn animation_task(
    display: &'static mut FireDisplay,
    frame: &'static mut FrameBuffer,
    strip: RmtStripWriter<'static>,
    state: AppState,
) {
    animation_logic(display, frame, strip, state).await;
}
