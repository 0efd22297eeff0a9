//! Integration tests for loading a sample store from a directory.

use std::path::Path;

use hece_audio::store::LoadFailureReason;
use hece_audio::{AudioError, StoreLoader, SyllableSource};
use pretty_assertions::assert_eq;

fn write_clip(dir: &Path, name: &str, sample_rate: u32, samples: &[i16]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(dir.join(name), spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_loads_every_wav_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    write_clip(dir.path(), "ba.wav", 22050, &[0, 1000, -1000]);
    write_clip(dir.path(), "kı.wav", 22050, &[500; 8]);
    write_clip(dir.path(), "tap.wav", 22050, &[32767]);
    std::fs::write(dir.path().join("notes.txt"), "not audio").unwrap();

    let loaded = StoreLoader::new(dir.path()).load().unwrap();
    let store = &loaded.store;

    assert_eq!(store.all_keys(), vec!["ba", "kı", "tap"]);
    assert_eq!(store.get("kı").unwrap().len(), 8);
    assert_eq!(store.get("tap").unwrap().samples(), &[1.0]);
    assert_eq!(store.sample_rate(), 22050);
    assert!(loaded.failures.is_empty());
}

#[test]
fn test_broken_clip_is_recorded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_clip(dir.path(), "ba.wav", 22050, &[0, 1000]);
    std::fs::write(dir.path().join("bozuk.wav"), b"RIFF garbage").unwrap();

    let loaded = StoreLoader::new(dir.path()).load().unwrap();

    assert_eq!(loaded.store.all_keys(), vec!["ba"]);
    assert_eq!(loaded.failures.len(), 1);
    assert_eq!(loaded.failures[0].path, dir.path().join("bozuk.wav"));
    assert!(matches!(
        loaded.failures[0].reason,
        LoadFailureReason::Decode { .. }
    ));
}

#[test]
fn test_wrong_sample_rate_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    write_clip(dir.path(), "ba.wav", 22050, &[0]);
    write_clip(dir.path(), "ki.wav", 44100, &[0]);

    let loaded = StoreLoader::new(dir.path()).load().unwrap();

    assert!(!loaded.store.has("ki"));
    assert_eq!(
        loaded.failures[0].reason,
        LoadFailureReason::SampleRateMismatch {
            expected: 22050,
            found: 44100
        }
    );
}

#[test]
fn test_custom_sample_rate() {
    let dir = tempfile::tempdir().unwrap();
    write_clip(dir.path(), "ba.wav", 16000, &[0, 1]);

    let loaded = StoreLoader::new(dir.path())
        .with_sample_rate(16000)
        .load()
        .unwrap();
    assert_eq!(loaded.store.sample_rate(), 16000);
}

#[test]
fn test_subdirectories_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_clip(dir.path(), "ba.wav", 22050, &[0]);
    std::fs::create_dir(dir.path().join("eski")).unwrap();
    write_clip(&dir.path().join("eski"), "ki.wav", 22050, &[0]);

    let loaded = StoreLoader::new(dir.path()).load().unwrap();
    assert_eq!(loaded.store.all_keys(), vec!["ba"]);
}

#[test]
fn test_directory_without_wavs_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readme.md"), "empty").unwrap();

    let err = StoreLoader::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, AudioError::EmptyStore { .. }));
}

#[test]
fn test_all_clips_broken_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.wav"), b"junk").unwrap();
    std::fs::write(dir.path().join("e.wav"), b"junk").unwrap();

    let err = StoreLoader::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, AudioError::EmptyStore { .. }));
    assert!(err.to_string().contains("2 failed"));
}
