//! Signal-generating modules: oscillators, noise, and constants.
//!
//! Every periodic generator takes its frequency from another module, so any
//! signal in the graph can modulate pitch. Constants are provided by
//! [`Value`]; randomness by [`WhiteNoise`].

mod noise;
mod sawtooth;
mod sine;
mod square;
mod triangle;
mod value;

pub use noise::WhiteNoise;
pub use sawtooth::{ReverseSawtoothOscillator, SawtoothOscillator};
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use triangle::TriangleOscillator;
pub use value::Value;
