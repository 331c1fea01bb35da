//! Core module trait and the shared handles used to wire the signal graph.

use std::sync::{Arc, Mutex};

/// Common interface for every node in the signal graph.
///
/// A module produces one sample per tick: oscillators, filters, envelopes,
/// and the delay line all implement this single operation. Calling
/// `next_sample` advances the module's internal state (phase accumulators,
/// counters, history) by exactly one tick, so it is not idempotent and there
/// is no peek-without-advance variant.
///
/// Outputs are not constrained to [-1.0, 1.0]; sums and filters may exceed
/// that range. Clamping happens only at the mixer's quantization stage.
pub trait Module {
    /// Produces the next sample, advancing one tick of internal state.
    fn next_sample(&mut self) -> f32;
}

/// Shared handle to a module in the graph.
///
/// The graph is not a tree: a single control module (an LFO, a `Value`) may
/// drive the frequency of several consumers at once. Handles are therefore
/// reference-counted, and each node carries its own lock so the control
/// thread can edit parameters of a live node while the audio thread is
/// evaluating the graph.
///
/// Nothing detects cycles. A module that (transitively) holds a handle back
/// to itself will deadlock on its own lock when evaluated.
pub type ModuleRef = Arc<Mutex<dyn Module + Send>>;

/// Wraps a module in a shared handle.
///
/// The returned handle keeps the concrete type, so the builder can retain a
/// clone for setter access (`Value::set`, `SineOscillator::set_frequency`)
/// while passing clones wherever a [`ModuleRef`] is expected.
///
/// # Examples
///
/// ```
/// use patchbay::{share, Module, SineOscillator, Value};
///
/// let freq = share(Value::new(440.0));
/// let mut osc = SineOscillator::new(freq.clone(), 44100.0);
/// osc.next_sample();
///
/// // The same handle still offers the typed setter.
/// freq.lock().unwrap().set(220.0);
/// ```
pub fn share<M: Module>(module: M) -> Arc<Mutex<M>> {
    Arc::new(Mutex::new(module))
}

/// Shared handles evaluate by locking and delegating, so a `ModuleRef` can be
/// used anywhere a module is expected.
impl<M: Module + ?Sized> Module for Arc<Mutex<M>> {
    fn next_sample(&mut self) -> f32 {
        self.lock().unwrap().next_sample()
    }
}
