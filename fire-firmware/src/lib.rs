// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap Allocator (Framebuffer liegt im PSRAM-Heap)
extern crate alloc;

// Module
pub mod config;
pub mod framebuffer;
pub mod hal;
pub mod tasks;

// Re-exports von fire-core
pub use fire_core::{AppState, PeriodicTask, StripError, StripWriter};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für xtensa-esp32-none-elf und ist deshalb
// vom Default-Build des Workspace ausgenommen. Die komplette Animations-
// und Timing-Logik lebt hardware-frei in fire-core; die Host-Tests dazu
// (inkl. Mock-Framebuffer und Mock-StripWriter) liegen in fire-tests.
