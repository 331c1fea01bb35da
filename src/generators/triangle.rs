//! Triangle wave oscillator.

use std::f32::consts::TAU;

use crate::{Module, ModuleRef};

/// A triangle wave oscillator.
///
/// Ramps linearly from -1.0 up to 1.0 over the first half of each period and
/// back down over the second half. Frequency comes from a child module
/// evaluated once per tick.
pub struct TriangleOscillator {
    /// Phase accumulator in radians
    phase: f32,
    /// Frequency source in Hz, evaluated every tick
    frequency: ModuleRef,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl TriangleOscillator {
    /// Creates a new triangle oscillator.
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

impl Module for TriangleOscillator {
    fn next_sample(&mut self) -> f32 {
        // Normalized position within the current period, in [0, 1).
        let cpos = self.phase.rem_euclid(TAU) / TAU;
        let ramp = if cpos < 0.5 { cpos } else { 1.0 - cpos };
        self.phase += TAU * self.frequency.next_sample() / self.sample_rate;
        4.0 * ramp - 1.0
    }
}
