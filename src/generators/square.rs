//! Square/pulse wave oscillator with a modulatable crossover threshold.

use std::f32::consts::TAU;

use crate::{Module, ModuleRef};

/// A square wave oscillator with variable pulse width.
///
/// Outputs -1.0 while the normalized phase position is below the threshold
/// and +1.0 afterwards. The threshold is a module evaluated once per tick
/// rather than a fixed 0.5, so sweeping it with an LFO produces pulse-width
/// modulation. A constant threshold of 0.5 gives a plain square wave.
pub struct SquareOscillator {
    /// Phase accumulator in radians
    phase: f32,
    /// Frequency source in Hz, evaluated every tick
    frequency: ModuleRef,
    /// Crossover point as a fraction of the period, evaluated every tick
    threshold: ModuleRef,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl SquareOscillator {
    /// Creates a new square oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Module producing the frequency in Hz
    /// * `threshold` - Module producing the crossover fraction (0.5 = square)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use patchbay::{share, Module, SquareOscillator, Value};
    ///
    /// let mut osc = SquareOscillator::new(
    ///     share(Value::new(110.0)),
    ///     share(Value::new(0.5)),
    ///     44100.0,
    /// );
    /// assert_eq!(osc.next_sample(), -1.0);
    /// ```
    pub fn new(frequency: ModuleRef, threshold: ModuleRef, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            frequency,
            threshold,
            sample_rate,
        }
    }

    /// Replaces the frequency source and resets the phase to zero.
    pub fn set_frequency(&mut self, frequency: ModuleRef) {
        self.frequency = frequency;
        self.phase = 0.0;
    }

    /// Replaces the threshold source. The phase is left untouched.
    pub fn set_threshold(&mut self, threshold: ModuleRef) {
        self.threshold = threshold;
    }
}

impl Module for SquareOscillator {
    fn next_sample(&mut self) -> f32 {
        let cpos = self.phase.rem_euclid(TAU) / TAU;
        let sample = if cpos < self.threshold.next_sample() {
            -1.0
        } else {
            1.0
        };
        self.phase += TAU * self.frequency.next_sample() / self.sample_rate;
        sample
    }
}
