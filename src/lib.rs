//! Patchbay - a modular audio-signal-generation engine.
//!
//! A patch is a graph of modules, each producing one sample per tick. The
//! [`Mixer`] drives the graph: once per output sample it evaluates every
//! registered channel, sums them, applies a [`Normalization`] policy, and
//! quantizes to 8-bit unsigned PCM for a pull-based audio backend.
//!
//! Modules are wired together through shared [`ModuleRef`] handles, so one
//! control signal can modulate several consumers and the control thread can
//! retune a patch while audio is running.
//!
//! ```
//! use std::sync::Arc;
//! use patchbay::{
//!     midi_to_freq, share, Envelope, Mixer, Normalization, SineOscillator, Value,
//! };
//!
//! let mixer = Arc::new(Mixer::new(44100.0, Normalization::Absolute));
//!
//! let gate = share(Value::new(0.0));
//! let osc = SineOscillator::new(share(Value::new(midi_to_freq(57))), 44100.0);
//! let voice = Envelope::new(0.5, 0.01, 0.05, 0.7, 0.3, gate.clone(), share(osc), 44100.0);
//! mixer.add_channel(share(voice));
//!
//! gate.lock().unwrap().set(1.0); // note on
//! let mut buffer = [0u8; 256];
//! mixer.fill(&mut buffer);       // what the audio backend calls
//! ```

pub mod combinators;
pub mod delay;
pub mod envelope;
mod error;
pub mod filters;
pub mod generators;
pub mod mixer;
pub mod module;
pub mod pitch;

// Re-export commonly used types at the crate root
pub use combinators::{Abs, Add, Mult, Sub};
pub use delay::Delay;
pub use envelope::Envelope;
pub use error::Error;
pub use filters::{HighPass, LowPass};
pub use generators::{
    ReverseSawtoothOscillator, SawtoothOscillator, SineOscillator, SquareOscillator,
    TriangleOscillator, Value, WhiteNoise,
};
pub use mixer::{quantize, Mixer, Normalization};
pub use module::{share, Module, ModuleRef};
pub use pitch::midi_to_freq;
