//! Layered patch demo: a filtered chord over a pulsing PWM bass.

mod common;

use std::sync::Arc;

use patchbay::{
    midi_to_freq, share, Add, Envelope, LowPass, Mixer, Mult, Normalization, SineOscillator,
    SquareOscillator, TriangleOscillator, Value,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let sample_rate = common::device_sample_rate()?;
    let mixer = Arc::new(Mixer::new(sample_rate, Normalization::Absolute));

    // A minor chord: three sines through a slowly sweeping low-pass.
    let chord = share(Add::new(
        share(Add::new(
            share(SineOscillator::new(
                share(Value::new(midi_to_freq(57))),
                sample_rate,
            )),
            share(SineOscillator::new(
                share(Value::new(midi_to_freq(60))),
                sample_rate,
            )),
        )),
        share(SineOscillator::new(
            share(Value::new(midi_to_freq(64))),
            sample_rate,
        )),
    ));

    // Cutoff sweeps 200..2000 Hz at 0.25 Hz: triangle LFO scaled and offset.
    let cutoff = share(Add::new(
        share(Mult::new(
            share(TriangleOscillator::new(
                share(Value::new(0.25)),
                sample_rate,
            )),
            share(Value::new(900.0)),
        )),
        share(Value::new(1100.0)),
    ));
    mixer.add_channel(share(LowPass::new(cutoff, chord, sample_rate)));

    // Bass: PWM square, gated on and off twice a second by an envelope
    // whose trigger is itself a square LFO.
    let width = share(Add::new(
        share(Mult::new(
            share(SineOscillator::new(share(Value::new(0.5)), sample_rate)),
            share(Value::new(0.2)),
        )),
        share(Value::new(0.5)),
    ));
    let bass = share(SquareOscillator::new(
        share(Value::new(midi_to_freq(33))),
        width,
        sample_rate,
    ));
    let gate = share(SquareOscillator::new(
        share(Value::new(2.0)),
        share(Value::new(0.5)),
        sample_rate,
    ));
    mixer.add_channel(share(Envelope::new(
        0.5,
        0.01,
        0.05,
        0.6,
        0.1,
        gate,
        bass,
        sample_rate,
    )));

    println!("playing for 10 seconds...");
    common::play(mixer, 10)
}
