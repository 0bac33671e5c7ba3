//! The bus capability contract.
//!
//! [`I2cBus`] is the minimal operation set a bus driver, or a decorator
//! around one, must provide: clock negotiation and a single addressed
//! write/read exchange. The usual transfer shapes (`write`, `read`,
//! `write_read`, `probe`) are provided on top of
//! [`transaction`](I2cBus::transaction).

use crate::timeout::{never_timeout, Timeout};

/// I2C bus settings.
///
/// Two settings are equal when their clock rates are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cSettings {
    /// Bus clock rate in Hz.
    pub clock_rate: u32,
}

impl I2cSettings {
    /// Standard mode (100 kHz).
    pub const STANDARD_MODE: Self = Self { clock_rate: 100_000 };

    /// Fast mode (400 kHz).
    pub const FAST_MODE: Self = Self { clock_rate: 400_000 };

    /// Fast mode plus (1 MHz).
    pub const FAST_MODE_PLUS: Self = Self { clock_rate: 1_000_000 };
}

impl Default for I2cSettings {
    fn default() -> Self {
        Self::STANDARD_MODE
    }
}

/// Master-side I2C bus.
///
/// One [`transaction`](Self::transaction) performs a single addressed
/// exchange: a write phase followed by a repeated-start read phase. An
/// empty `data_out` skips the write phase, an empty `data_in` skips the
/// read phase, and both empty is an address-only probe. Implementations
/// poll `timeout` while the transfer is in flight and abort with a
/// bus-level error of their own once it reports expiry; a transfer error
/// also covers a device that never acknowledges its address.
pub trait I2cBus {
    /// Bus-level error type.
    type Error: core::fmt::Debug;

    /// Negotiate the bus clock rate.
    fn configure(&mut self, settings: I2cSettings)
        -> Result<(), Self::Error>;

    /// Perform one addressed write/read exchange.
    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
        timeout: Timeout<'_>,
    ) -> Result<(), Self::Error>;

    /// Write `data_out` to the device at `address`.
    fn write(
        &mut self,
        address: u8,
        data_out: &[u8],
        timeout: Timeout<'_>,
    ) -> Result<(), Self::Error> {
        self.transaction(address, data_out, &mut [], timeout)
    }

    /// Read into `data_in` from the device at `address`.
    fn read(
        &mut self,
        address: u8,
        data_in: &mut [u8],
        timeout: Timeout<'_>,
    ) -> Result<(), Self::Error> {
        self.transaction(address, &[], data_in, timeout)
    }

    /// Write `data_out`, then read into `data_in` under a repeated start.
    ///
    /// The conventional register access shape: write the register address,
    /// read the value back without releasing the bus.
    fn write_read(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
        timeout: Timeout<'_>,
    ) -> Result<(), Self::Error> {
        self.transaction(address, data_out, data_in, timeout)
    }

    /// Check whether a device acknowledges `address`.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        let mut never = never_timeout();
        self.transaction(address, &[], &mut [], &mut never)
    }
}
