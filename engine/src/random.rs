//! Injectable randomness for synthetic telemetry and session ids.

use std::collections::VecDeque;

/// 2^53, the number of distinct `f64` values `next_f64` can produce.
const UNIT_SCALE: f64 = (1_u64 << 53) as f64;

pub trait RandomSource: Send {
    fn next_u64(&mut self) -> u64;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / UNIT_SCALE
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let picked = (self.next_f64() * f64::from(n)).floor() as u32;
        picked.min(n - 1)
    }
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_u64(&mut self) -> u64 {
        rand::random::<u64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: VecDeque<u64>,
}

impl ScriptedRandom {
    /// Raw 64-bit outputs.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        let values: VecDeque<u64> = values.into_iter().collect();
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self { values }
    }

    /// Outputs chosen so that `next_f64` yields each unit value in turn.
    ///
    /// Units are clamped to `[0, 1)`.
    #[must_use]
    pub fn from_units(units: &[f64]) -> Self {
        Self::new(units.iter().map(|&u| {
            let scaled = (u.clamp(0.0, 1.0) * UNIT_SCALE) as u64;
            scaled.min((1_u64 << 53) - 1) << 11
        }))
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&mut self) -> u64 {
        let value = self.values.pop_front().unwrap_or_default();
        self.values.push_back(value);
        value
    }
}

/// Short session identifier: the first 8 hex digits of a random UUID.
pub fn session_id(random: &mut dyn RandomSource) -> String {
    let mut bytes = [0_u8; 16];
    bytes[..8].copy_from_slice(&random.next_u64().to_be_bytes());
    bytes[8..].copy_from_slice(&random.next_u64().to_be_bytes());
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    let mut id = uuid.simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_round_trip_through_next_f64() {
        let mut random = ScriptedRandom::from_units(&[0.0, 0.25, 0.5]);
        assert_eq!(random.next_f64(), 0.0);
        assert_eq!(random.next_f64(), 0.25);
        assert_eq!(random.next_f64(), 0.5);
        // Cycles back to the start.
        assert_eq!(random.next_f64(), 0.0);
    }

    #[test]
    fn unit_of_one_stays_below_one() {
        let mut random = ScriptedRandom::from_units(&[1.0]);
        assert!(random.next_f64() < 1.0);
    }

    #[test]
    fn below_covers_every_bucket() {
        let mut random = ScriptedRandom::from_units(&[0.0, 0.26, 0.51, 0.76, 0.999_999]);
        let picks: Vec<u32> = (0..5).map(|_| random.below(4)).collect();
        assert_eq!(picks, vec![0, 1, 2, 3, 3]);
        assert_eq!(random.below(0), 0);
    }

    #[test]
    fn session_id_takes_leading_hex_digits() {
        let mut random = ScriptedRandom::new([0xdead_beef_0000_0000, 0]);
        assert_eq!(session_id(&mut random), "deadbeef");
    }

    #[test]
    fn thread_random_session_id_is_hex() {
        let id = session_id(&mut ThreadRandom);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
