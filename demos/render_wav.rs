//! Offline render demo: noise hits with a delayed echo, written to a WAV.

use std::sync::Arc;

use anyhow::Result;
use patchbay::{
    share, Delay, Envelope, Mixer, Mult, Normalization, SquareOscillator, Value, WhiteNoise,
};

const SAMPLE_RATE: f32 = 44100.0;
const SECONDS: u32 = 4;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mixer = Arc::new(Mixer::new(SAMPLE_RATE, Normalization::Absolute));

    // Percussive noise hits: a 1 Hz square gates a short envelope. Each
    // channel gets its own chain; a module mixed on one channel and fed
    // into another would be ticked twice per output sample.
    let hit = |rate: f32| {
        let gate = share(SquareOscillator::new(
            share(Value::new(1.0)),
            share(Value::new(0.5)),
            rate,
        ));
        Envelope::new(
            0.5,
            0.005,
            0.08,
            0.0,
            0.05,
            gate,
            share(WhiteNoise::new()),
            rate,
        )
    };
    mixer.add_channel(share(hit(SAMPLE_RATE)));

    // A quieter copy of the same hits through a 150 ms delay line that is
    // kept permanently armed.
    let echo = share(Delay::new(
        0.15,
        0.5,
        share(hit(SAMPLE_RATE)),
        share(Value::new(1.0)),
        SAMPLE_RATE,
    ));
    mixer.add_channel(share(Mult::new(echo, share(Value::new(0.5)))));

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create("patchbay_demo.wav", spec)?;

    let mut buffer = [0u8; 512];
    let mut remaining = (SAMPLE_RATE as u32 * SECONDS) as usize;
    while remaining > 0 {
        let count = remaining.min(buffer.len());
        mixer.fill(&mut buffer[..count]);
        for &byte in &buffer[..count] {
            let sample = ((byte as i32 - 127) * 256).clamp(-32768, 32767) as i16;
            writer.write_sample(sample)?;
        }
        remaining -= count;
    }

    writer.finalize()?;
    println!("wrote patchbay_demo.wav");
    Ok(())
}
