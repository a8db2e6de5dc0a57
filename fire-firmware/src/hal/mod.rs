// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits bzw. schmalen
// Init-Funktionen, um Testbarkeit und Wartbarkeit zu verbessern.

pub mod display;
pub mod imu;
pub mod sdcard;
pub mod strip_writer;

pub use strip_writer::{RmtStripWriter, StripError, StripWriter};
