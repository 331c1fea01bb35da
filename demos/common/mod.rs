//! Shared audio-output plumbing for the demo patches.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, StreamConfig};
use patchbay::Mixer;

/// Returns the default output device's sample rate, so patches can be built
/// at the rate the device will actually run at.
pub fn device_sample_rate() -> Result<f32> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no output device available"))?;
    Ok(device.default_output_config()?.sample_rate().0 as f32)
}

/// Starts pulling the mixer's output on the default output device.
///
/// The returned stream keeps playing until dropped.
pub fn start(mixer: Arc<Mixer>) -> Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no output device available"))?;
    let config = device.default_output_config()?;

    let stream = match config.sample_format() {
        SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), mixer)?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), mixer)?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), mixer)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "unsupported sample format: {sample_format}"
            ));
        }
    };

    stream.play()?;
    Ok(stream)
}

/// Plays the mixer on the default output device for a fixed duration.
pub fn play(mixer: Arc<Mixer>, seconds: u64) -> Result<()> {
    let _stream = start(mixer)?;
    std::thread::sleep(Duration::from_secs(seconds));
    Ok(())
}

/// Builds an output stream that pulls 8-bit samples from the mixer and
/// converts them to whatever format the device negotiated.
fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mixer: Arc<Mixer>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let mut pcm: Vec<u8> = Vec::new();

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let frames = data.len() / channels;
            pcm.resize(frames, 0);
            mixer.fill(&mut pcm);
            for (frame, &byte) in data.chunks_mut(channels).zip(&pcm) {
                let value = T::from_sample((byte as f32 - 127.0) / 127.0);
                for sample in frame.iter_mut() {
                    *sample = value;
                }
            }
        },
        |err| tracing::error!("audio stream error: {err}"),
        None,
    )?;

    Ok(stream)
}
