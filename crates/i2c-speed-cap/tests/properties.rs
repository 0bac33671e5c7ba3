use core::convert::Infallible;

use proptest::prelude::*;

use i2c_speed_cap::{
    I2cBus, I2cSettings, SpeedCapError, SpeedCappedI2c, Timeout,
};

// ---------------------------------------------------------------------------
// Recording bus
// ---------------------------------------------------------------------------

/// A bus that always succeeds and remembers every negotiated rate.
#[derive(Default)]
struct RecordingBus {
    configure_log: Vec<u32>,
}

impl I2cBus for RecordingBus {
    type Error = Infallible;

    fn configure(&mut self, settings: I2cSettings) -> Result<(), Infallible> {
        self.configure_log.push(settings.clock_rate);
        Ok(())
    }

    fn transaction(
        &mut self,
        _address: u8,
        _data_out: &[u8],
        _data_in: &mut [u8],
        _timeout: Timeout<'_>,
    ) -> Result<(), Infallible> {
        Ok(())
    }
}

fn hz(clock_rate: u32) -> I2cSettings {
    I2cSettings { clock_rate }
}

/// Reference model of the traffic a request history should produce: each
/// effective rate in order, skipping zeros and rates the bus already runs
/// at.
fn expected_log(ceiling: u32, requests: &[u32]) -> Vec<u32> {
    let mut applied = ceiling;
    let mut log = Vec::new();
    for &request in requests {
        let effective = request.min(ceiling);
        if effective != 0 && effective != applied {
            log.push(effective);
            applied = effective;
        }
    }
    log
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn applied_rate_is_the_min_of_request_and_ceiling(
        ceiling in 1..=4_000_000u32,
        request in 1..=4_000_000u32,
    ) {
        let mut bus = RecordingBus::default();
        let mut cap =
            SpeedCappedI2c::create_with_ceiling(&mut bus, ceiling).unwrap();

        cap.configure(hz(request)).unwrap();

        prop_assert_eq!(cap.applied_rate(), request.min(ceiling));
    }

    #[test]
    fn negotiated_rates_never_exceed_the_ceiling(
        ceiling in 1..=4_000_000u32,
        requests in prop::collection::vec(1..=4_000_000u32, 0..12),
    ) {
        let mut bus = RecordingBus::default();
        let mut cap =
            SpeedCappedI2c::create_with_ceiling(&mut bus, ceiling).unwrap();
        for &request in &requests {
            cap.configure(hz(request)).unwrap();
        }
        drop(cap);

        prop_assert!(bus.configure_log.iter().all(|&rate| rate <= ceiling));
    }

    #[test]
    fn the_bus_sees_the_deduplicated_effective_history(
        ceiling in 1..=4_000_000u32,
        requests in prop::collection::vec(
            prop_oneof![1 => Just(0u32), 4 => 1..=4_000_000u32],
            0..12,
        ),
    ) {
        let mut bus = RecordingBus::default();
        let mut cap =
            SpeedCappedI2c::create_with_ceiling(&mut bus, ceiling).unwrap();
        for &request in &requests {
            let _ = cap.configure(hz(request));
        }
        drop(cap);

        prop_assert_eq!(bus.configure_log, expected_log(ceiling, &requests));
    }

    #[test]
    fn zero_requests_fail_and_change_nothing(
        ceiling in 1..=4_000_000u32,
        request in 1..=4_000_000u32,
    ) {
        let mut bus = RecordingBus::default();
        let mut cap =
            SpeedCappedI2c::create_with_ceiling(&mut bus, ceiling).unwrap();

        prop_assert_eq!(
            cap.configure(hz(0)),
            Err(SpeedCapError::InvalidFrequency)
        );
        prop_assert_eq!(cap.applied_rate(), ceiling);

        cap.configure(hz(request)).unwrap();
        let applied = cap.applied_rate();
        prop_assert_eq!(
            cap.configure(hz(0)),
            Err(SpeedCapError::InvalidFrequency)
        );
        prop_assert_eq!(cap.applied_rate(), applied);
    }

    #[test]
    fn repeating_a_request_adds_no_bus_traffic(
        ceiling in 1..=4_000_000u32,
        request in 1..=4_000_000u32,
        repeats in 1..5usize,
    ) {
        let mut bus = RecordingBus::default();
        let mut cap =
            SpeedCappedI2c::create_with_ceiling(&mut bus, ceiling).unwrap();
        for _ in 0..=repeats {
            cap.configure(hz(request)).unwrap();
        }
        drop(cap);

        let expected = usize::from(request.min(ceiling) != ceiling);
        prop_assert_eq!(bus.configure_log.len(), expected);
    }
}
