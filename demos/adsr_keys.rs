//! Interactive envelope demo: space toggles the gate, number keys change
//! the note, q quits.

mod common;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use patchbay::{
    midi_to_freq, share, Envelope, Mixer, Normalization, TriangleOscillator, Value,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let sample_rate = common::device_sample_rate()?;
    let mixer = Arc::new(Mixer::new(sample_rate, Normalization::Clip));

    // The gate and frequency stay on the control side as shared handles.
    let gate = share(Value::new(0.0));
    let freq = share(Value::new(midi_to_freq(57)));

    let osc = share(TriangleOscillator::new(freq.clone(), sample_rate));
    mixer.add_channel(share(Envelope::new(
        0.5,
        0.02,
        0.1,
        0.7,
        0.4,
        gate.clone(),
        osc,
        sample_rate,
    )));

    let _stream = common::start(mixer)?;

    println!("space: toggle note, 1-8: pick a note, q: quit");
    enable_raw_mode()?;
    let result = event_loop(&gate, &freq);
    disable_raw_mode()?;
    result
}

fn event_loop(
    gate: &Arc<std::sync::Mutex<Value>>,
    freq: &Arc<std::sync::Mutex<Value>>,
) -> Result<()> {
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            match key.code {
                KeyCode::Char(' ') => {
                    let mut gate = gate.lock().unwrap();
                    let level = if gate.get() > 0.5 { 0.0 } else { 1.0 };
                    gate.set(level);
                }
                KeyCode::Char(c @ '1'..='8') => {
                    let offset = c as i32 - '1' as i32;
                    freq.lock().unwrap().set(midi_to_freq(57 + offset * 2));
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }
}
