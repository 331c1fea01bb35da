//! Sawtooth wave oscillators, rising and falling.

use std::f32::consts::TAU;

use crate::{Module, ModuleRef};

/// A sawtooth wave oscillator.
///
/// Rises linearly from -1.0 to 1.0 over one period, then snaps back.
/// Frequency comes from a child module evaluated once per tick.
pub struct SawtoothOscillator {
    /// Phase accumulator in radians
    phase: f32,
    /// Frequency source in Hz, evaluated every tick
    frequency: ModuleRef,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl SawtoothOscillator {
    /// Creates a new rising sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Module producing the frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(frequency: ModuleRef, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }

    /// Replaces the frequency source and resets the phase to zero.
    pub fn set_frequency(&mut self, frequency: ModuleRef) {
        self.frequency = frequency;
        self.phase = 0.0;
    }
}

impl Module for SawtoothOscillator {
    fn next_sample(&mut self) -> f32 {
        let sample = 2.0 * (self.phase.rem_euclid(TAU) / TAU) - 1.0;
        self.phase += TAU * self.frequency.next_sample() / self.sample_rate;
        sample
    }
}

/// A falling (reverse) sawtooth wave oscillator.
///
/// The mirror image of [`SawtoothOscillator`]: falls linearly from 1.0 to
/// -1.0 over one period.
pub struct ReverseSawtoothOscillator {
    /// Phase accumulator in radians
    phase: f32,
    /// Frequency source in Hz, evaluated every tick
    frequency: ModuleRef,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl ReverseSawtoothOscillator {
    /// Creates a new falling sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Module producing the frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(frequency: ModuleRef, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }

    /// Replaces the frequency source and resets the phase to zero.
    pub fn set_frequency(&mut self, frequency: ModuleRef) {
        self.frequency = frequency;
        self.phase = 0.0;
    }
}

impl Module for ReverseSawtoothOscillator {
    fn next_sample(&mut self) -> f32 {
        let sample = 2.0 * (1.0 - self.phase.rem_euclid(TAU) / TAU) - 1.0;
        self.phase += TAU * self.frequency.next_sample() / self.sample_rate;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Value;
    use crate::share;

    const SAMPLE_RATE: f32 = 100.0;
    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_sawtooth_starts_at_trough() {
        let mut osc = SawtoothOscillator::new(share(Value::new(1.0)), SAMPLE_RATE);
        assert!((osc.next_sample() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_sawtooth_rises_linearly() {
        let mut osc = SawtoothOscillator::new(share(Value::new(1.0)), SAMPLE_RATE);
        let s0 = osc.next_sample();
        let s1 = osc.next_sample();
        let s2 = osc.next_sample();
        assert!(s1 > s0 && s2 > s1);
        assert!(((s1 - s0) - (s2 - s1)).abs() < EPSILON);
    }

    #[test]
    fn test_sawtooth_range() {
        let mut osc = SawtoothOscillator::new(share(Value::new(13.7)), SAMPLE_RATE);
        for _ in 0..1000 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_reverse_starts_at_peak() {
        let mut osc = ReverseSawtoothOscillator::new(share(Value::new(1.0)), SAMPLE_RATE);
        assert!((osc.next_sample() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_reverse_mirrors_sawtooth() {
        let mut fwd = SawtoothOscillator::new(share(Value::new(2.0)), SAMPLE_RATE);
        let mut rev = ReverseSawtoothOscillator::new(share(Value::new(2.0)), SAMPLE_RATE);
        for _ in 0..200 {
            assert!((fwd.next_sample() + rev.next_sample()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reverse_range() {
        let mut osc = ReverseSawtoothOscillator::new(share(Value::new(13.7)), SAMPLE_RATE);
        for _ in 0..1000 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }
}
