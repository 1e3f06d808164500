//! LSM303AGR accelerometer (I2C)
//!
//! The micro:bit v2 carries an LSM303AGR combined accelerometer and
//! magnetometer on its internal I2C bus. Only the accelerometer is used.
//!
//! # Configuration Used
//!
//! - 50 Hz output data rate, X/Y/Z enabled
//! - Block data update, high-resolution (12-bit) mode, ±2 g full scale
//! - 1 mg per LSB after right-aligning the 12-bit sample

use embedded_hal_async::i2c::I2c;

/// 7-bit I2C address of the accelerometer
pub const ADDRESS: u8 = 0x19;

/// LSM303AGR accelerometer register addresses
pub mod reg {
    /// Device identification
    pub const WHO_AM_I_A: u8 = 0x0F;
    /// Data rate and axis enable
    pub const CTRL_REG1_A: u8 = 0x20;
    /// Block data update, scale, resolution
    pub const CTRL_REG4_A: u8 = 0x23;
    /// First of six output bytes (X low)
    pub const OUT_X_L_A: u8 = 0x28;
}

/// Expected `WHO_AM_I_A` value
pub const WHO_AM_I_VALUE: u8 = 0x33;

/// Sub-address flag for multi-byte reads
const AUTO_INCREMENT: u8 = 0x80;

/// ODR = 50 Hz, normal power, X/Y/Z enabled
const CTRL_REG1_50HZ_XYZ: u8 = 0x47;

/// BDU set, ±2 g, high-resolution
const CTRL_REG4_BDU_HR_2G: u8 = 0x88;

/// Errors that can occur talking to the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelError<E> {
    /// I2C bus error
    Bus(E),
    /// `WHO_AM_I_A` did not match
    WrongDevice(u8),
}

impl<E> From<E> for AccelError<E> {
    fn from(e: E) -> Self {
        AccelError::Bus(e)
    }
}

/// One acceleration sample in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x_mg: i16,
    pub y_mg: i16,
    pub z_mg: i16,
}

impl Acceleration {
    /// Axes as an array, X first
    pub fn axes(&self) -> [i16; 3] {
        [self.x_mg, self.y_mg, self.z_mg]
    }

    /// Decode the six output registers
    fn from_registers(raw: &[u8; 6]) -> Self {
        // 12-bit samples are left-aligned in each 16-bit register pair
        let axis = |lo: u8, hi: u8| i16::from_le_bytes([lo, hi]) >> 4;
        Self {
            x_mg: axis(raw[0], raw[1]),
            y_mg: axis(raw[2], raw[3]),
            z_mg: axis(raw[4], raw[5]),
        }
    }
}

/// LSM303AGR accelerometer driver
pub struct Lsm303agr<I> {
    i2c: I,
}

impl<I: I2c> Lsm303agr<I> {
    /// Create a driver on the given bus
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Check the device identity and configure sampling
    pub async fn init(&mut self) -> Result<(), AccelError<I::Error>> {
        let id = self.read_register(reg::WHO_AM_I_A).await?;
        if id != WHO_AM_I_VALUE {
            return Err(AccelError::WrongDevice(id));
        }

        self.write_register(reg::CTRL_REG1_A, CTRL_REG1_50HZ_XYZ)
            .await?;
        self.write_register(reg::CTRL_REG4_A, CTRL_REG4_BDU_HR_2G)
            .await?;
        Ok(())
    }

    /// Read the latest sample
    pub async fn read(&mut self) -> Result<Acceleration, AccelError<I::Error>> {
        let mut raw = [0u8; 6];
        self.i2c
            .write_read(ADDRESS, &[reg::OUT_X_L_A | AUTO_INCREMENT], &mut raw)
            .await?;
        Ok(Acceleration::from_registers(&raw))
    }

    /// Release the bus
    pub fn release(self) -> I {
        self.i2c
    }

    async fn read_register(&mut self, register: u8) -> Result<u8, I::Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(ADDRESS, &[register], &mut value).await?;
        Ok(value[0])
    }

    async fn write_register(&mut self, register: u8, value: u8) -> Result<(), I::Error> {
        self.i2c.write(ADDRESS, &[register, value]).await
    }
}
