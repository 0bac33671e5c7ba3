#![no_std]
//! Speed cap decorator for shared I2C buses.
//!
//! Wraps any [`I2cBus`] implementation and clamps every negotiated clock
//! rate to a fixed ceiling, so the slowest-rated device on a shared bus
//! sets the pace for everyone. Reconfigurations that would not change the
//! rate already applied to the hardware are skipped entirely; data
//! transfers pass through untouched.

mod bus;
mod cap;
mod error;
mod timeout;

pub use bus::{I2cBus, I2cSettings};
pub use cap::{SpeedCappedI2c, DEFAULT_CEILING_HZ};
pub use error::SpeedCapError;
pub use timeout::{never_timeout, Timeout, TimeoutError};
