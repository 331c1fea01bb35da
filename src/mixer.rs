//! Channel registry, mixdown, normalization, and quantization.

use std::str::FromStr;
use std::sync::Mutex;

use crate::error::Error;
use crate::{Module, ModuleRef};

/// Policy for scaling the summed signal before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// No adjustment; out-of-range sums clamp at quantization.
    Clip,
    /// Divide by `ceil(|mixdown|)` when nonzero: scales the sum just enough
    /// to fit within one unit of its rounded-up magnitude, so gain still
    /// varies with amplitude.
    Relative,
    /// Divide by the channel-slot count when nonzero: a fixed gain reduction
    /// independent of the signal. Empty slots count.
    Absolute,
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clip" => Ok(Normalization::Clip),
            "relative" => Ok(Normalization::Relative),
            "absolute" => Ok(Normalization::Absolute),
            other => Err(Error::UnknownNormalization(other.to_string())),
        }
    }
}

/// Converts a mixed sample to 8-bit unsigned PCM.
///
/// `floor(sample × 127) + 127`, clamped to [0, 255]. Note the asymmetry:
/// a full-scale 1.0 maps to 254, not 255, because the floor happens before
/// the offset. 0.0 maps to the 127 midpoint and -1.0 to 0.
pub fn quantize(sample: f32) -> u8 {
    (((sample * 127.0).floor() + 127.0).clamp(0.0, 255.0)) as u8
}

/// Registry guts kept behind a single lock: the slots and the normalization
/// mode are read together on every buffer pass.
struct MixerState {
    channels: Vec<Option<ModuleRef>>,
    normalization: Normalization,
}

/// The output bus: an ordered set of channel slots mixed down to one
/// 8-bit sample stream.
///
/// A `Mixer` is an explicitly constructed, explicitly owned object; wrap it
/// in an `Arc` to share it with the audio backend thread. The channel
/// registry lives behind a mutex so the control thread can register and
/// replace channels while the backend is pulling buffers; the lock is held
/// for a whole buffer, so the registry never changes mid-buffer.
///
/// ```
/// use std::sync::Arc;
/// use patchbay::{share, Mixer, Normalization, SineOscillator, Value};
///
/// let mixer = Arc::new(Mixer::new(44100.0, Normalization::Absolute));
/// let osc = SineOscillator::new(share(Value::new(440.0)), mixer.sample_rate());
/// let index = mixer.add_channel(share(osc));
/// assert_eq!(index, 0);
///
/// let mut buffer = [0u8; 64];
/// mixer.fill(&mut buffer);
/// ```
pub struct Mixer {
    state: Mutex<MixerState>,
    sample_rate: f32,
}

impl Mixer {
    /// Creates an empty mixer.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz the graph was built for
    /// * `normalization` - Initial normalization policy
    pub fn new(sample_rate: f32, normalization: Normalization) -> Self {
        Self {
            state: Mutex::new(MixerState {
                channels: Vec::new(),
                normalization,
            }),
            sample_rate,
        }
    }

    /// Returns the sample rate this mixer runs at.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Appends a module as a new channel and returns its slot index.
    pub fn add_channel(&self, module: ModuleRef) -> usize {
        let mut state = self.state.lock().unwrap();
        state.channels.push(Some(module));
        let index = state.channels.len() - 1;
        tracing::debug!(index, "channel added");
        index
    }

    /// Replaces the module in an existing slot.
    ///
    /// Out-of-bounds indices are ignored.
    pub fn set_channel(&self, index: usize, module: ModuleRef) {
        let mut state = self.state.lock().unwrap();
        if let Some(slot) = state.channels.get_mut(index) {
            *slot = Some(module);
            tracing::debug!(index, "channel replaced");
        }
    }

    /// Empties an existing slot. The slot keeps its index and can be
    /// refilled with [`Mixer::set_channel`].
    ///
    /// Out-of-bounds indices are ignored.
    pub fn clear_channel(&self, index: usize) {
        let mut state = self.state.lock().unwrap();
        if let Some(slot) = state.channels.get_mut(index) {
            *slot = None;
            tracing::debug!(index, "channel cleared");
        }
    }

    /// Returns the number of channel slots, occupied or not.
    pub fn channel_count(&self) -> usize {
        self.state.lock().unwrap().channels.len()
    }

    /// Changes the normalization policy.
    pub fn set_normalization(&self, normalization: Normalization) {
        let mut state = self.state.lock().unwrap();
        state.normalization = normalization;
        tracing::debug!(?normalization, "normalization changed");
    }

    /// Renders one buffer of 8-bit unsigned PCM.
    ///
    /// This is the pull callback the audio backend drives at its own cadence.
    /// For every output sample, each occupied channel is evaluated exactly
    /// once, in slot order, and the results are summed, normalized, and
    /// quantized. The registry lock is held for the entire buffer.
    pub fn fill(&self, buffer: &mut [u8]) {
        let mut state = self.state.lock().unwrap();
        let nchan = state.channels.len();
        let normalization = state.normalization;

        for out in buffer.iter_mut() {
            let mut mixdown = 0.0f32;
            for channel in state.channels.iter_mut() {
                if let Some(module) = channel {
                    mixdown += module.next_sample();
                }
            }

            match normalization {
                Normalization::Clip => {}
                Normalization::Relative => {
                    if mixdown != 0.0 {
                        mixdown /= mixdown.abs().ceil();
                    }
                }
                Normalization::Absolute => {
                    if nchan != 0 {
                        mixdown /= nchan as f32;
                    }
                }
            }

            *out = quantize(mixdown);
        }
    }
}
