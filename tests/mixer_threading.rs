//! Cross-thread exercises of the mixer's channel registry: the control
//! thread registers and replaces channels while another thread pulls
//! buffers, the way an audio backend would.

use std::sync::Arc;
use std::thread;

use patchbay::{midi_to_freq, share, Mixer, Normalization, SineOscillator, Value};

#[test]
fn test_registration_during_playback_keeps_indices_sequential() {
    let mixer = Arc::new(Mixer::new(44100.0, Normalization::Absolute));

    let producer = {
        let mixer = mixer.clone();
        thread::spawn(move || {
            let mut buffer = [0u8; 256];
            for _ in 0..500 {
                mixer.fill(&mut buffer);
            }
        })
    };

    let mut indices = Vec::new();
    for i in 0..64 {
        let freq = share(Value::new(midi_to_freq(40 + (i % 24))));
        indices.push(mixer.add_channel(share(SineOscillator::new(freq, 44100.0))));
    }

    producer.join().unwrap();

    // No slot was lost or duplicated by the interleaving.
    assert_eq!(indices, (0..64).collect::<Vec<_>>());
    assert_eq!(mixer.channel_count(), 64);
}

#[test]
fn test_concurrent_registration_from_two_threads() {
    let mixer = Arc::new(Mixer::new(44100.0, Normalization::Relative));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let mixer = mixer.clone();
            thread::spawn(move || {
                (0..100)
                    .map(|_| mixer.add_channel(share(Value::new(0.1))))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut indices: Vec<usize> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    indices.sort_unstable();

    assert_eq!(indices, (0..200).collect::<Vec<_>>());
    assert_eq!(mixer.channel_count(), 200);
}

#[test]
fn test_replacement_during_playback() {
    let mixer = Arc::new(Mixer::new(44100.0, Normalization::Absolute));
    let index = mixer.add_channel(share(Value::new(0.5)));

    let producer = {
        let mixer = mixer.clone();
        thread::spawn(move || {
            let mut buffer = [0u8; 128];
            for _ in 0..500 {
                mixer.fill(&mut buffer);
                // Every byte comes from one of the two constants; a torn
                // slot would show up as something else entirely.
                for &byte in buffer.iter() {
                    assert!(byte == 190 || byte == 63);
                }
            }
        })
    };

    for _ in 0..500 {
        mixer.set_channel(index, share(Value::new(-0.5)));
        mixer.set_channel(index, share(Value::new(0.5)));
    }

    producer.join().unwrap();
    assert_eq!(mixer.channel_count(), 1);
}
