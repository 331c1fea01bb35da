//! ADSR envelope: a four-phase amplitude shaper gated by a trigger signal.

use crate::{Module, ModuleRef};

/// Phase of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeState {
    /// Trigger low, output silent
    Off,
    /// Volume ramping 0 to 1
    Attack,
    /// Volume ramping 1 down to the sustain level
    Decay,
    /// Holding at the sustain level while the trigger stays high
    Sustain,
    /// Volume ramping from its last value down to 0
    Release,
}

/// An ADSR (attack, decay, sustain, release) envelope.
///
/// Shapes the amplitude of a child signal under the control of a trigger
/// signal. Each tick the trigger is compared against a fixed threshold:
/// rising above it starts the attack, falling below it starts the release
/// from whatever volume the envelope had reached. Re-triggering during the
/// release discards the remaining tail and starts a fresh attack.
///
/// The child signal is evaluated every tick even while the envelope is off,
/// so oscillator phase keeps advancing and repeated notes stay continuous;
/// silence comes from the zero volume, not from skipping evaluation.
///
/// Phase durations are converted from seconds to sample counts once, at
/// construction. Changing them afterwards would desynchronize the elapsed
/// counters, so reconfiguring means building a new envelope.
pub struct Envelope {
    state: EnvelopeState,
    /// Trigger comparison level
    threshold: f32,
    /// Sustain volume, 0.0 to 1.0
    sustain: f32,
    /// Phase durations in samples
    attack_samples: u32,
    decay_samples: u32,
    release_samples: u32,
    /// Elapsed-sample counter for the current ramp phase
    attack_count: u32,
    decay_count: u32,
    release_count: u32,
    /// Last computed volume; the release ramps down from this
    volume: f32,
    /// Gate signal, evaluated every tick
    trigger: ModuleRef,
    /// Signal being shaped, evaluated every tick
    source: ModuleRef,
}

impl Envelope {
    /// Creates a new envelope.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Trigger level that gates the envelope
    /// * `attack` - Attack duration in seconds
    /// * `decay` - Decay duration in seconds
    /// * `sustain` - Sustain volume (0.0 to 1.0)
    /// * `release` - Release duration in seconds
    /// * `trigger` - Module producing the gate signal
    /// * `source` - Module producing the signal to shape
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use patchbay::{share, Envelope, Module, SineOscillator, Value};
    ///
    /// let gate = share(Value::new(0.0));
    /// let osc = SineOscillator::new(share(Value::new(440.0)), 44100.0);
    /// let mut env = Envelope::new(
    ///     0.5, 0.01, 0.05, 0.7, 0.2,
    ///     gate.clone(),
    ///     share(osc),
    ///     44100.0,
    /// );
    ///
    /// assert_eq!(env.next_sample(), 0.0); // gate low, silent
    /// gate.lock().unwrap().set(1.0);      // note on
    /// env.next_sample();
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        threshold: f32,
        attack: f32,
        decay: f32,
        sustain: f32,
        release: f32,
        trigger: ModuleRef,
        source: ModuleRef,
        sample_rate: f32,
    ) -> Self {
        Self {
            state: EnvelopeState::Off,
            threshold,
            sustain,
            attack_samples: (attack * sample_rate) as u32,
            decay_samples: (decay * sample_rate) as u32,
            release_samples: (release * sample_rate) as u32,
            attack_count: 0,
            decay_count: 0,
            release_count: 0,
            volume: 0.0,
            trigger,
            source,
        }
    }

    #[cfg(test)]
    fn state(&self) -> EnvelopeState {
        self.state
    }
}

impl Module for Envelope {
    fn next_sample(&mut self) -> f32 {
        // Both inputs advance exactly one tick in every state.
        let data = self.source.next_sample();
        let trigger = self.trigger.next_sample();

        match self.state {
            EnvelopeState::Off => {
                if trigger >= self.threshold {
                    self.state = EnvelopeState::Attack;
                    self.attack_count = 0;
                }
                0.0
            }
            EnvelopeState::Attack => {
                self.attack_count += 1;
                if self.attack_count > self.attack_samples {
                    self.state = EnvelopeState::Decay;
                    self.decay_count = 0;
                    // Boundary tick: volume is effectively 1.
                    data
                } else {
                    if trigger < self.threshold {
                        self.state = EnvelopeState::Release;
                        self.release_count = 0;
                    }
                    self.volume = self.attack_count as f32 / self.attack_samples as f32;
                    data * self.volume
                }
            }
            EnvelopeState::Decay => {
                self.decay_count += 1;
                if self.decay_count > self.decay_samples {
                    self.state = EnvelopeState::Sustain;
                    self.volume = self.sustain;
                    data * self.sustain
                } else {
                    if trigger < self.threshold {
                        self.state = EnvelopeState::Release;
                        self.release_count = 0;
                    }
                    let progress = self.decay_count as f32 / self.decay_samples as f32;
                    self.volume = self.sustain + (1.0 - self.sustain) * (1.0 - progress);
                    data * self.volume
                }
            }
            EnvelopeState::Sustain => {
                if trigger < self.threshold {
                    self.state = EnvelopeState::Release;
                    self.release_count = 0;
                }
                // The transition tick still sounds at the sustain level.
                data * self.sustain
            }
            EnvelopeState::Release => {
                self.release_count += 1;
                if self.release_count > self.release_samples {
                    self.volume = 0.0;
                    self.state = EnvelopeState::Off;
                    0.0
                } else if trigger >= self.threshold {
                    // Re-trigger discards the in-progress release.
                    self.state = EnvelopeState::Attack;
                    self.attack_count = 0;
                    0.0
                } else {
                    let progress = self.release_count as f32 / self.release_samples as f32;
                    data * ((1.0 - progress) * self.volume)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Value;
    use crate::share;

    // 0.25 s is exactly representable, so each ramp is exactly 10 samples.
    const SAMPLE_RATE: f32 = 40.0;
    const EPSILON: f32 = 1e-6;

    // 10-sample attack, 10-sample decay, 10-sample release.
    fn test_envelope(trigger: ModuleRef, source: ModuleRef) -> Envelope {
        Envelope::new(
            0.5,
            0.25,
            0.25,
            0.6,
            0.25,
            trigger,
            source,
            SAMPLE_RATE,
        )
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_off_is_silent() {
        let trigger = share(Value::new(0.0));
        let mut env = test_envelope(trigger, share(Value::new(1.0)));
        for _ in 0..100 {
            assert_eq!(env.next_sample(), 0.0);
        }
        assert_eq!(env.state(), EnvelopeState::Off);
    }

    #[test]
    fn test_attack_ramp_and_decay_transition() {
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger, share(Value::new(1.0)));

        // Arming tick: OFF -> ATTACK, still silent.
        assert_eq!(env.next_sample(), 0.0);

        // Ten attack ticks ramp volume k/10.
        for k in 1..=10 {
            let sample = env.next_sample();
            assert!(approx_eq(sample, k as f32 / 10.0));
        }
        assert_eq!(env.state(), EnvelopeState::Attack);

        // Transition tick emits the raw child sample.
        assert_eq!(env.next_sample(), 1.0);
        assert_eq!(env.state(), EnvelopeState::Decay);
    }

    #[test]
    fn test_decay_ramps_to_sustain() {
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger, share(Value::new(1.0)));

        for _ in 0..12 {
            env.next_sample(); // arm + attack + decay transition
        }

        // Decay ramps linearly from 1 down to sustain over 10 ticks.
        for k in 1..=10 {
            let progress = k as f32 / 10.0;
            let expected = 0.6 + (1.0 - 0.6) * (1.0 - progress);
            assert!(approx_eq(env.next_sample(), expected));
        }

        // Then the envelope settles at the sustain level.
        assert!(approx_eq(env.next_sample(), 0.6));
        assert_eq!(env.state(), EnvelopeState::Sustain);
        for _ in 0..50 {
            assert!(approx_eq(env.next_sample(), 0.6));
        }
    }

    #[test]
    fn test_release_ramp_from_sustain() {
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger.clone(), share(Value::new(1.0)));

        for _ in 0..30 {
            env.next_sample();
        }
        assert_eq!(env.state(), EnvelopeState::Sustain);

        // Dropping the gate still sounds at the sustain level for one tick.
        trigger.lock().unwrap().set(0.0);
        assert!(approx_eq(env.next_sample(), 0.6));
        assert_eq!(env.state(), EnvelopeState::Release);

        // Linear ramp from the carried volume down to zero.
        for k in 1..=10 {
            let expected = 0.6 * (1.0 - k as f32 / 10.0);
            assert!(approx_eq(env.next_sample(), expected));
        }
        assert_eq!(env.next_sample(), 0.0);
        assert_eq!(env.state(), EnvelopeState::Off);
    }

    #[test]
    fn test_early_release_during_attack() {
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger.clone(), share(Value::new(1.0)));

        env.next_sample(); // arm
        for _ in 0..4 {
            env.next_sample();
        }

        // Gate drop mid-attack: this tick still uses the attack volume.
        trigger.lock().unwrap().set(0.0);
        assert!(approx_eq(env.next_sample(), 0.5));
        assert_eq!(env.state(), EnvelopeState::Release);

        // Release ramps down from the attack-reached volume.
        assert!(approx_eq(env.next_sample(), 0.5 * 0.9));
    }

    #[test]
    fn test_retrigger_during_release() {
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger.clone(), share(Value::new(1.0)));

        for _ in 0..30 {
            env.next_sample();
        }
        trigger.lock().unwrap().set(0.0);
        env.next_sample(); // sustain -> release
        env.next_sample();
        env.next_sample();
        assert_eq!(env.state(), EnvelopeState::Release);

        // Raising the gate again restarts the attack, silent for one tick.
        trigger.lock().unwrap().set(1.0);
        assert_eq!(env.next_sample(), 0.0);
        assert_eq!(env.state(), EnvelopeState::Attack);
        assert!(approx_eq(env.next_sample(), 0.1));
    }

    #[test]
    fn test_child_advances_while_off() {
        struct Ramp {
            n: f32,
        }
        impl Module for Ramp {
            fn next_sample(&mut self) -> f32 {
                self.n += 1.0;
                self.n
            }
        }

        let source = share(Ramp { n: 0.0 });
        let trigger = share(Value::new(0.0));
        let mut env = test_envelope(trigger, source.clone());

        for _ in 0..5 {
            assert_eq!(env.next_sample(), 0.0);
        }
        // The child ticked every time even though the envelope was off.
        assert_eq!(source.lock().unwrap().n, 5.0);
    }

    #[test]
    fn test_envelope_shapes_child_signal() {
        // Output is child × volume, not just the volume ramp.
        let trigger = share(Value::new(1.0));
        let mut env = test_envelope(trigger, share(Value::new(-0.5)));

        env.next_sample(); // arm
        assert!(approx_eq(env.next_sample(), -0.5 * 0.1));
        assert!(approx_eq(env.next_sample(), -0.5 * 0.2));
    }
}
