use core::fmt;

/// Errors returned by [`SpeedCappedI2c`](crate::SpeedCappedI2c).
///
/// `Bus` carries the wrapped driver's own error verbatim; nothing is
/// retried, translated or annotated on the way through.
#[derive(derive_more::From, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedCapError<E: core::fmt::Debug> {
    /// The configure request clamped to a 0 Hz clock rate, which cannot
    /// drive a bus. Raised before any contact with the wrapped driver.
    InvalidFrequency,
    /// The wrapped driver failed.
    Bus(E),
}

impl<E: fmt::Debug + fmt::Display> fmt::Display for SpeedCapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedCapError::InvalidFrequency => {
                write!(f, "effective clock rate is 0 Hz")
            }
            SpeedCapError::Bus(err) => write!(f, "bus error: {}", err),
        }
    }
}
