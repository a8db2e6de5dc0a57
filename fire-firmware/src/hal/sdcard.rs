// SD-Karten-Mount (best-effort)
//
// Der Mount passiert vor der LCD-Initialisierung und wird vom Demo
// danach nicht weiter benutzt; jeder Fehler wird vom Aufrufer
// geloggt und ignoriert.

use embedded_sdmmc::{SdCard, TimeSource, Timestamp, VolumeIdx, VolumeManager};
use esp_hal::delay::Delay;

use super::display::SpiDev;

/// FAT braucht eine Zeitquelle; das Demo schreibt nie, also reicht
/// ein fester Null-Zeitstempel.
struct NullTimeSource;

impl TimeSource for NullTimeSource {
    fn get_timestamp(&self) -> Timestamp {
        Timestamp::from_fat(0, 0)
    }
}

pub type MountError = embedded_sdmmc::Error<embedded_sdmmc::SdCardError>;

/// Probt die Karte und öffnet das erste FAT-Volume
///
/// Gibt bei Erfolg die Kartengröße in Bytes zurück.
pub fn mount(spi_device: SpiDev, delay: Delay) -> Result<u64, MountError> {
    let card = SdCard::new(spi_device, delay);
    let size = card.num_bytes().map_err(embedded_sdmmc::Error::DeviceError)?;

    let volume_mgr = VolumeManager::new(card, NullTimeSource);
    let _volume = volume_mgr.open_volume(VolumeIdx(0))?;

    Ok(size)
}
