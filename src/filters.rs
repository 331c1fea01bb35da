//! One-pole low-pass and high-pass filters.
//!
//! Both filters recompute their smoothing coefficient from the cutoff module
//! every tick, so a time-varying cutoff (filter sweeps, envelope-controlled
//! brightness) works without any extra plumbing:
//!
//! `rc = 1/(2π·cutoff)`, `alpha = dt/(rc + dt)` with `dt = 1/sample_rate`.

use std::f32::consts::TAU;

use crate::{Module, ModuleRef};

/// A one-pole low-pass filter.
///
/// Output is `alpha·input + (1−alpha)·previous`, smoothing out content above
/// the cutoff frequency.
pub struct LowPass {
    /// Cutoff frequency source in Hz, evaluated every tick
    cutoff: ModuleRef,
    /// Input signal
    source: ModuleRef,
    /// Previous output sample
    prev: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl LowPass {
    /// Creates a new low-pass filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff` - Module producing the cutoff frequency in Hz
    /// * `source` - Input signal to filter
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(cutoff: ModuleRef, source: ModuleRef, sample_rate: f32) -> Self {
        Self {
            cutoff,
            source,
            prev: 0.0,
            sample_rate,
        }
    }

    /// Replaces the cutoff source. Filter history is kept.
    pub fn set_cutoff(&mut self, cutoff: ModuleRef) {
        self.cutoff = cutoff;
    }
}

impl Module for LowPass {
    fn next_sample(&mut self) -> f32 {
        let rc = 1.0 / (TAU * self.cutoff.next_sample());
        let dt = 1.0 / self.sample_rate;
        let alpha = dt / (rc + dt);
        let input = self.source.next_sample();
        let out = alpha * input + (1.0 - alpha) * self.prev;
        self.prev = out;
        out
    }
}

/// A one-pole high-pass filter.
///
/// Output is `alpha·previous + (1−alpha)·input`, attenuating content below
/// the cutoff frequency.
pub struct HighPass {
    /// Cutoff frequency source in Hz, evaluated every tick
    cutoff: ModuleRef,
    /// Input signal
    source: ModuleRef,
    /// Previous output sample
    prev: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl HighPass {
    /// Creates a new high-pass filter.
    ///
    /// # Arguments
    ///
    /// * `cutoff` - Module producing the cutoff frequency in Hz
    /// * `source` - Input signal to filter
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(cutoff: ModuleRef, source: ModuleRef, sample_rate: f32) -> Self {
        Self {
            cutoff,
            source,
            prev: 0.0,
            sample_rate,
        }
    }

    /// Replaces the cutoff source. Filter history is kept.
    pub fn set_cutoff(&mut self, cutoff: ModuleRef) {
        self.cutoff = cutoff;
    }
}

impl Module for HighPass {
    fn next_sample(&mut self) -> f32 {
        let rc = 1.0 / (TAU * self.cutoff.next_sample());
        let dt = 1.0 / self.sample_rate;
        let alpha = dt / (rc + dt);
        let input = self.source.next_sample();
        let out = alpha * self.prev + (1.0 - alpha) * input;
        self.prev = out;
        out
    }
}
