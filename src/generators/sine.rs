//! Sine wave oscillator.

use std::f32::consts::TAU;

use crate::{Module, ModuleRef};

/// A sine wave oscillator.
///
/// The frequency is itself a module, evaluated once per tick, so the pitch
/// can be modulated by an LFO, an envelope, or held constant with a
/// [`Value`](crate::Value). The phase accumulator advances by
/// `2π · f / sample_rate` each tick.
pub struct SineOscillator {
    /// Phase accumulator in radians
    phase: f32,
    /// Frequency source in Hz, evaluated every tick
    frequency: ModuleRef,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Module producing the frequency in Hz
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use patchbay::{share, Module, SineOscillator, Value};
    ///
    /// let mut osc = SineOscillator::new(share(Value::new(440.0)), 44100.0);
    /// let sample = osc.next_sample();
    /// ```
    pub fn new(frequency: ModuleRef, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }

    /// Replaces the frequency source and restarts the waveform.
    ///
    /// The phase accumulator is reset to zero: switching frequency sources
    /// restarts the waveform rather than preserving phase continuity.
    pub fn set_frequency(&mut self, frequency: ModuleRef) {
        self.frequency = frequency;
        self.phase = 0.0;
    }
}

impl Module for SineOscillator {
    fn next_sample(&mut self) -> f32 {
        let sample = self.phase.sin();
        self.phase += TAU * self.frequency.next_sample() / self.sample_rate;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Value;
    use crate::share;

    const SAMPLE_RATE: f32 = 1000.0;
    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_first_sample_is_zero() {
        let mut osc = SineOscillator::new(share(Value::new(100.0)), SAMPLE_RATE);
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn test_phase_increment() {
        // At f = 100 Hz and 1 kHz sample rate the phase advances 2π/10 per
        // tick, so sample k equals sin(k · 2π/10).
        let mut osc = SineOscillator::new(share(Value::new(100.0)), SAMPLE_RATE);
        for k in 0..40 {
            let expected = (k as f32 * TAU / 10.0).sin();
            assert!((osc.next_sample() - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_full_period_returns_to_start() {
        let freq = 50.0;
        let mut osc = SineOscillator::new(share(Value::new(freq)), SAMPLE_RATE);
        let first = osc.next_sample();

        // sample_rate / freq ticks later the waveform repeats.
        let period = (SAMPLE_RATE / freq) as usize;
        for _ in 0..period - 1 {
            osc.next_sample();
        }
        assert!((osc.next_sample() - first).abs() < EPSILON);
    }

    #[test]
    fn test_set_frequency_resets_phase() {
        let mut osc = SineOscillator::new(share(Value::new(100.0)), SAMPLE_RATE);
        for _ in 0..7 {
            osc.next_sample();
        }
        osc.set_frequency(share(Value::new(200.0)));
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn test_modulated_frequency() {
        // Frequency changes take effect on the very next tick.
        let freq = share(Value::new(0.0));
        let mut osc = SineOscillator::new(freq.clone(), SAMPLE_RATE);

        // Zero frequency holds the phase at zero.
        osc.next_sample();
        assert_eq!(osc.next_sample(), 0.0);

        freq.lock().unwrap().set(250.0);
        osc.next_sample();
        // Phase advanced by 2π/4 after one tick at 250 Hz.
        assert!((osc.next_sample() - (TAU / 4.0).sin()).abs() < EPSILON);
    }
}
