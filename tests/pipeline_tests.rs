//! Integration Tests
//!
//! End-to-end tests for the voxgen generation pipeline: synthesize through
//! the mock collaborator, decode, retain, export, and cross-validate the
//! exported WAV with an independent reader.

use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;

use voxgen::audio::{audio_buffer_to_wav, decode_audio_data, AudioBuffer, WAV_HEADER_LEN};
use voxgen::history::HISTORY_CAPACITY;
use voxgen::playback::{NullSink, PlaybackEvent, Player};
use voxgen::session::Session;
use voxgen::speech::{FailureMode, MockSynthesizer, Voice, OUTPUT_SAMPLE_RATE};
use voxgen::VoxError;

/// Helper to create a test sine wave buffer
fn create_sine_buffer(frequency: f32, sample_rate: u32, duration_secs: f32) -> AudioBuffer {
    let num_samples = (sample_rate as f32 * duration_secs) as usize;
    let angular = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;
    let samples = (0..num_samples)
        .map(|i| 0.8 * (angular * i as f32).sin())
        .collect();

    AudioBuffer::from_channels(vec![samples], sample_rate).unwrap()
}

fn mock_session() -> Session {
    Session::new(Box::new(MockSynthesizer::new()))
}

// === Generation Pipeline Tests ===

#[test]
fn test_generate_decode_export_roundtrip() {
    let mut session = mock_session();
    let clip = session
        .generate("the quick brown fox", Voice::Adam, None)
        .unwrap();

    let wav = clip.to_wav();
    assert!(wav.len() > WAV_HEADER_LEN);

    // Decoding the exported payload must reproduce the clip's samples to
    // within one quantization step
    let decoded = decode_audio_data(&wav[WAV_HEADER_LEN..], OUTPUT_SAMPLE_RATE, 1).unwrap();
    assert_eq!(decoded.num_samples(), clip.audio.num_samples());
    for (a, b) in clip.audio.channel(0).iter().zip(decoded.channel(0)) {
        assert_abs_diff_eq!(a, b, epsilon = 1.0 / 32768.0);
    }
}

#[test]
fn test_exported_wav_parses_with_independent_reader() {
    let mut session = mock_session();
    let clip = session.generate("hello world", Voice::Kore, None).unwrap();
    let wav = clip.to_wav();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(clip.file_name());
    std::fs::write(&path, &wav).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();

    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, OUTPUT_SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration() as usize, clip.audio.num_samples());

    // Sample values agree with our own decoder's view of the payload
    let from_hound: Vec<f32> = reader
        .samples::<i16>()
        .map(|s| s.unwrap() as f32 / 32768.0)
        .collect();
    let from_decoder = decode_audio_data(&wav[WAV_HEADER_LEN..], OUTPUT_SAMPLE_RATE, 1).unwrap();
    assert_eq!(from_hound, from_decoder.channel(0).to_vec());
}

#[test]
fn test_header_invariants_for_generated_clip() {
    let mut session = mock_session();
    let clip = session.generate("check the header", Voice::Puck, None).unwrap();
    let wav = clip.to_wav();

    let chunk_size = u32::from_le_bytes(wav[4..8].try_into().unwrap());
    let data_len = u32::from_le_bytes(wav[40..44].try_into().unwrap());
    let expected = clip.audio.num_channels() as u32 * clip.audio.num_samples() as u32 * 2;

    assert_eq!(data_len, expected);
    assert_eq!(chunk_size, 36 + data_len);
    assert_eq!(wav.len(), WAV_HEADER_LEN + data_len as usize);
}

#[test]
fn test_history_bound_end_to_end() {
    let mut session = mock_session();
    for i in 0..11 {
        session
            .generate(&format!("generation {}", i), Voice::Zephyr, None)
            .unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);

    // Descending recency: newest first, "generation 0" evicted
    let texts: Vec<&str> = history.clips().iter().map(|c| c.text.as_str()).collect();
    let expected: Vec<String> = (1..=10).rev().map(|i| format!("generation {}", i)).collect();
    assert_eq!(texts, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_empty_text_issues_no_request() {
    // A synthesizer that would fail loudly if reached: getting
    // InvalidInput back proves the collaborator was never called
    let mut session = Session::new(Box::new(MockSynthesizer::failing(FailureMode::Network)));

    assert!(matches!(
        session.generate("   \n ", Voice::Kore, None),
        Err(VoxError::InvalidInput { .. })
    ));
    assert!(session.history().is_empty());
}

#[test]
fn test_failure_surfaces_single_user_message() {
    let mut session = Session::new(Box::new(MockSynthesizer::failing(
        FailureMode::SafetyRejection,
    )));
    let err = session
        .generate("a perfectly fine sentence", Voice::Kore, None)
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "This text was flagged by safety filters. Please try a different story."
    );
    assert!(session.history().is_empty());
}

// === Playback Tests ===

#[test]
fn test_play_generated_clip_to_natural_end() {
    let mut session = mock_session();
    let clip = session.generate("play me", Voice::Fenrir, None).unwrap();

    let mut player = Player::new(Box::new(NullSink));
    player.play(&clip.audio).unwrap();
    assert!(player.is_playing());

    // Advance in 100ms steps until the scheduled duration elapses
    let step = OUTPUT_SAMPLE_RATE as u64 / 10;
    let mut events = Vec::new();
    for _ in 0..1000 {
        if let Some(event) = player.advance(step) {
            events.push(event);
            break;
        }
    }

    assert_eq!(events, vec![PlaybackEvent::Finished]);
    assert!(!player.is_playing());
}

#[test]
fn test_switching_clips_never_overlaps_sources() {
    let mut session = mock_session();
    session.generate("first clip", Voice::Kore, None).unwrap();
    session.generate("second clip", Voice::Adam, None).unwrap();

    let mut player = Player::new(Box::new(NullSink));
    player.play(&session.history().clips()[1].audio).unwrap();
    // Restarting with another clip implicitly stops the first source
    player.play(&session.history().clips()[0].audio).unwrap();

    assert!(player.is_playing());
    player.stop();
    assert!(!player.is_playing());

    // Stop while idle stays a no-op
    player.stop();
    assert!(!player.is_playing());
}

// === Codec Edge Cases ===

#[test]
fn test_known_pcm_scenario() {
    // 0x0000 then 0x8000: silence and negative full scale
    let buffer = decode_audio_data(&[0x00, 0x00, 0x00, 0x80], 24000, 1).unwrap();
    assert_eq!(buffer.num_samples(), 2);
    assert_abs_diff_eq!(buffer.channel(0)[0], 0.0);
    assert_abs_diff_eq!(buffer.channel(0)[1], -1.0);
}

#[test]
fn test_known_wav_scenario() {
    let buffer = AudioBuffer::from_channels(vec![vec![0.0, -1.0, 1.0]], 24000).unwrap();
    let wav = audio_buffer_to_wav(&buffer);

    assert_eq!(wav.len(), 50);
    assert_eq!(&wav[44..50], &[0x00, 0x00, 0x00, 0x80, 0xFF, 0x7F]);
}

#[test]
fn test_sine_roundtrip_through_file() {
    let original = create_sine_buffer(440.0, OUTPUT_SAMPLE_RATE, 0.25);
    let wav = audio_buffer_to_wav(&original);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    std::fs::write(&path, &wav).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.duration() as usize, original.num_samples());
    for (read, orig) in reader.samples::<i16>().zip(original.channel(0)) {
        let read = read.unwrap() as f32 / 32768.0;
        assert_abs_diff_eq!(read, *orig, epsilon = 1.0 / 32768.0);
    }
}
