//! Pitch-to-frequency conversion.

/// Converts a MIDI note number to a frequency in Hz.
///
/// Equal temperament anchored at 8.1758 Hz for note 0 (C-1), which puts
/// note 69 (A4) at 440 Hz. Handy for parameterizing generators:
///
/// ```
/// use patchbay::{midi_to_freq, share, SineOscillator, Value};
///
/// let a4 = SineOscillator::new(share(Value::new(midi_to_freq(69))), 44100.0);
/// ```
pub fn midi_to_freq(note: i32) -> f32 {
    8.1758 * 2.0_f32.powf(note as f32 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_440() {
        assert!((midi_to_freq(69) - 440.0).abs() < 0.01);
    }

    #[test]
    fn test_middle_c() {
        assert!((midi_to_freq(60) - 261.63).abs() < 0.01);
    }

    #[test]
    fn test_octave_doubles_frequency() {
        for note in [24, 48, 57, 69] {
            let ratio = midi_to_freq(note + 12) / midi_to_freq(note);
            assert!((ratio - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_note_zero() {
        assert!((midi_to_freq(0) - 8.1758).abs() < 1e-4);
    }
}
