//! Cancellation for bus transfers.
//!
//! A timeout is a plain predicate the bus driver polls while a transfer is
//! in flight: `Ok(())` means time remains, `Err(TimeoutError)` means the
//! deadline has passed and the driver should abort with a bus error of its
//! own.

/// Returned by a timeout predicate once its deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeoutError;

/// Cancellable timeout predicate polled during a transfer.
pub type Timeout<'a> = &'a mut dyn FnMut() -> Result<(), TimeoutError>;

/// A timeout that never fires.
pub fn never_timeout() -> impl FnMut() -> Result<(), TimeoutError> {
    || Ok(())
}
