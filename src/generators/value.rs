//! Constant value generator.

use crate::Module;

/// A module that outputs a settable constant.
///
/// This is the usual way to feed a fixed frequency, threshold, or trigger
/// level into the graph. Unlike the other generators it is not modulatable;
/// the scalar changes only through [`Value::set`]. Since modules live behind
/// shared handles, the control thread can keep a clone of the handle and
/// retune a running patch:
///
/// ```
/// use patchbay::{midi_to_freq, share, Module, SineOscillator, Value};
///
/// let freq = share(Value::new(midi_to_freq(57)));
/// let mut osc = SineOscillator::new(freq.clone(), 44100.0);
///
/// // Later, from the control side:
/// freq.lock().unwrap().set(midi_to_freq(60));
/// ```
pub struct Value {
    value: f32,
}

impl Value {
    /// Creates a new constant with the given value.
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Replaces the stored value.
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Returns the stored value without ticking the module.
    pub fn get(&self) -> f32 {
        self.value
    }
}

impl Module for Value {
    fn next_sample(&mut self) -> f32 {
        self.value
    }
}
