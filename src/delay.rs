//! Triggered delay line.

use std::collections::VecDeque;

use crate::{Module, ModuleRef};

/// A fixed-length delay line gated by a trigger signal.
///
/// While the trigger is above its threshold the delay acts as a shift
/// register: each tick pops the oldest sample as output and pushes the
/// child's fresh sample onto the back. The queue starts zero-filled, so the
/// first `length` ticks after arming are silent while it charges.
///
/// When the trigger sits at or below the threshold the child passes through
/// with zero lag and the line disarms; the next time the trigger rises the
/// queue is reset to zeros rather than resuming stale buffered content.
pub struct Delay {
    /// Buffered samples, always `length` entries while armed
    queue: VecDeque<f32>,
    /// Queue length in samples
    length: usize,
    /// Input signal
    source: ModuleRef,
    /// Gate signal, evaluated every tick
    trigger: ModuleRef,
    /// Trigger comparison level
    threshold: f32,
    /// Whether the queue has been reset since the trigger last went low
    armed: bool,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl Delay {
    /// Creates a new delay line.
    ///
    /// # Arguments
    ///
    /// * `length` - Delay time in seconds
    /// * `threshold` - Trigger level that engages the delay
    /// * `source` - Input signal to delay
    /// * `trigger` - Module producing the gate signal
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(
        length: f32,
        threshold: f32,
        source: ModuleRef,
        trigger: ModuleRef,
        sample_rate: f32,
    ) -> Self {
        let samples = (length * sample_rate) as usize;
        Self {
            queue: VecDeque::from(vec![0.0; samples]),
            length: samples,
            source,
            trigger,
            threshold,
            armed: false,
            sample_rate,
        }
    }

    /// Replaces the queue with one of the given length in seconds.
    ///
    /// Buffered history is discarded.
    pub fn set_length(&mut self, length: f32) {
        self.length = (length * self.sample_rate) as usize;
        self.queue = VecDeque::from(vec![0.0; self.length]);
    }
}

impl Module for Delay {
    fn next_sample(&mut self) -> f32 {
        if self.trigger.next_sample() > self.threshold {
            if !self.armed {
                // First armed tick: drop whatever the queue held.
                self.queue = VecDeque::from(vec![0.0; self.length]);
                self.armed = true;
            }
            // A zero-length line degenerates to a passthrough.
            match self.queue.pop_front() {
                Some(data) => {
                    self.queue.push_back(self.source.next_sample());
                    data
                }
                None => self.source.next_sample(),
            }
        } else {
            self.armed = false;
            self.source.next_sample()
        }
    }
}
