use crate::bus::{I2cBus, I2cSettings};
use crate::error::SpeedCapError;
use crate::timeout::Timeout;

/// Ceiling applied by [`SpeedCappedI2c::create`] when the caller does not
/// pick one: 2 MHz, above Fast-mode Plus and below High-speed mode.
pub const DEFAULT_CEILING_HZ: u32 = 2_000_000;

/// Decorator that caps the clock rate of a wrapped bus.
///
/// A thin wrapper around any [`I2cBus`] that clamps every `configure`
/// request to a fixed ceiling and skips reconfigurations that would not
/// change the rate already applied to the hardware. Transfers pass through
/// untouched. On a bus shared by several drivers, wrap it with the ceiling
/// of the slowest-rated device and hand the wrapper to each of them.
///
/// The adapter borrows the bus exclusively and must remain the only agent
/// issuing configuration changes while it is alive; otherwise its cached
/// applied rate goes stale.
pub struct SpeedCappedI2c<'a, B: I2cBus> {
    bus: &'a mut B,
    ceiling: u32,
    applied_rate: u32,
}

impl<'a, B: I2cBus> SpeedCappedI2c<'a, B> {
    /// Wrap `bus` with a ceiling of [`DEFAULT_CEILING_HZ`].
    ///
    /// Performs no bus I/O and currently never fails; the `Result` keeps
    /// the signature uniform with the other driver factories.
    pub fn create(bus: &'a mut B) -> Result<Self, SpeedCapError<B::Error>> {
        Self::create_with_ceiling(bus, DEFAULT_CEILING_HZ)
    }

    /// Wrap `bus`, forwarding at most `ceiling_hz` to it.
    ///
    /// The ceiling is fixed for the lifetime of the adapter. It is not
    /// validated here; a 0 Hz ceiling makes every later `configure` fail
    /// with [`SpeedCapError::InvalidFrequency`].
    pub fn create_with_ceiling(
        bus: &'a mut B,
        ceiling_hz: u32,
    ) -> Result<Self, SpeedCapError<B::Error>> {
        // The bus is assumed to already run at or below the ceiling, so a
        // first configure at exactly the ceiling is a no-op.
        Ok(Self { bus, ceiling: ceiling_hz, applied_rate: ceiling_hz })
    }

    /// The ceiling in Hz.
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// The last clock rate confirmed with the wrapped driver, or the
    /// ceiling before the first forwarded configuration.
    pub fn applied_rate(&self) -> u32 {
        self.applied_rate
    }
}

impl<B: I2cBus> I2cBus for SpeedCappedI2c<'_, B> {
    type Error = SpeedCapError<B::Error>;

    fn configure(
        &mut self,
        settings: I2cSettings,
    ) -> Result<(), Self::Error> {
        let effective = settings.clock_rate.min(self.ceiling);

        // 0 Hz cannot drive a bus. Checking the clamped value also covers
        // a 0 Hz ceiling, where every request must fail instead of
        // silently matching the cached 0 Hz below.
        if effective == 0 {
            return Err(SpeedCapError::InvalidFrequency);
        }

        // Same rate as last time: leave the hardware alone.
        if effective == self.applied_rate {
            return Ok(());
        }

        self.bus.configure(I2cSettings { clock_rate: effective })?;
        self.applied_rate = effective;
        Ok(())
    }

    fn transaction(
        &mut self,
        address: u8,
        data_out: &[u8],
        data_in: &mut [u8],
        timeout: Timeout<'_>,
    ) -> Result<(), Self::Error> {
        Ok(self.bus.transaction(address, data_out, data_in, timeout)?)
    }
}
