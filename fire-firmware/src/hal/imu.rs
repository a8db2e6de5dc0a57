// MPU6886 IMU am internen I2C-Bus
//
// Wird initialisiert, vom Demo aber nicht ausgelesen. Init weckt den
// Chip auf und prüft die WHO_AM_I-Kennung; Fehler sind best-effort.

use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

const MPU6886_ADDR: u8 = 0x68;

// Register
const REG_WHO_AM_I: u8 = 0x75;
const REG_PWR_MGMT_1: u8 = 0x6B;

/// Erwartete WHO_AM_I-Kennung des MPU6886
const CHIP_ID: u8 = 0x19;

/// PWR_MGMT_1: Sleep aus, Clock-Auswahl automatisch
const PWR_WAKE_AUTO_CLOCK: u8 = 0x01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImuError {
    /// I2C-Transfer fehlgeschlagen
    Bus,
    /// Anderes Gerät an der MPU6886-Adresse
    UnexpectedChipId(u8),
}

pub struct Mpu6886 {
    i2c: I2c<'static, Blocking>,
}

impl Mpu6886 {
    pub fn new(i2c: I2c<'static, Blocking>) -> Self {
        Self { i2c }
    }

    /// Prüft die Chip-Kennung und weckt den Sensor auf
    pub fn init(&mut self) -> Result<(), ImuError> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(MPU6886_ADDR, &[REG_WHO_AM_I], &mut id)
            .map_err(|_| ImuError::Bus)?;
        if id[0] != CHIP_ID {
            return Err(ImuError::UnexpectedChipId(id[0]));
        }

        self.i2c
            .write(MPU6886_ADDR, &[REG_PWR_MGMT_1, PWR_WAKE_AUTO_CLOCK])
            .map_err(|_| ImuError::Bus)?;
        Ok(())
    }
}
