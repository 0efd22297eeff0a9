//! Text to waveform.
//!
//! Synthesis runs in four steps:
//!
//! 1. tokenize the text into words and punctuation marks
//! 2. turn every token into segments: one per syllable plus a word pause,
//!    or a single pause for a punctuation mark
//! 3. crossfade the segments together left to right
//! 4. normalize the result to the output peak
//!
//! Syllables without a clip become silence; they never abort synthesis.

use hece_audio::{SyllableSource, Waveform};
use hece_lang::{clean_word, syllabify, tokenize, Token};
use serde::Serialize;

use crate::config::SynthConfig;
use crate::coverage::{check_coverage, CoverageReport};
use crate::error::{SynthError, SynthResult};
use crate::segment::{merge_segments, Segment, SegmentKind};

/// A syllable and whether the store has a clip for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableStatus {
    /// Syllable text.
    pub text: String,
    /// True if the store has a clip.
    pub available: bool,
}

/// One cleaned word split into syllables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordBreakdown {
    /// The word after removing non-alphabetic characters.
    pub word: String,
    /// Its syllables in order.
    pub syllables: Vec<SyllableStatus>,
}

impl WordBreakdown {
    /// Renders the word as `ki-[tap]`, bracketing missing syllables.
    pub fn display(&self) -> String {
        self.syllables
            .iter()
            .map(|s| {
                if s.available {
                    s.text.clone()
                } else {
                    format!("[{}]", s.text)
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Returns true if every syllable has a clip.
    pub fn is_complete(&self) -> bool {
        self.syllables.iter().all(|s| s.available)
    }
}

/// Output of [`Synthesizer::synthesize`].
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Merged, normalized audio.
    pub waveform: Waveform,
    /// Coverage of the input text.
    pub coverage: CoverageReport,
    /// Per-word syllable breakdown.
    pub words: Vec<WordBreakdown>,
    /// Number of segments that were merged.
    pub segment_count: usize,
}

impl Synthesis {
    /// Returns the output duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.waveform.duration_seconds()
    }
}

/// Concatenative synthesizer over a borrowed syllable store.
#[derive(Debug)]
pub struct Synthesizer<'a, S: SyllableSource + ?Sized> {
    store: &'a S,
    config: SynthConfig,
}

impl<'a, S: SyllableSource + ?Sized> Synthesizer<'a, S> {
    /// Creates a synthesizer.
    ///
    /// # Errors
    /// - [`SynthError::InvalidConfig`] if a config value is unusable
    /// - [`SynthError::SampleRateMismatch`] if the store's rate differs from
    ///   the configured one
    pub fn new(store: &'a S, config: SynthConfig) -> SynthResult<Self> {
        config.validate()?;
        if store.sample_rate() != config.sample_rate {
            return Err(SynthError::SampleRateMismatch {
                store: store.sample_rate(),
                config: config.sample_rate,
            });
        }
        Ok(Self { store, config })
    }

    /// Returns the config.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Reports which of the text's syllables the store can voice.
    pub fn coverage(&self, text: &str) -> CoverageReport {
        check_coverage(text, self.store)
    }

    /// Splits every word of `text` into syllables and marks their availability.
    ///
    /// Words with no alphabetic characters are left out.
    pub fn syllabify_text(&self, text: &str) -> Vec<WordBreakdown> {
        tokenize(text)
            .into_iter()
            .filter_map(|token| match token {
                Token::Word(raw) => {
                    let word = clean_word(&raw);
                    (!word.is_empty()).then(|| self.breakdown(word))
                }
                Token::Punctuation(_) => None,
            })
            .collect()
    }

    fn breakdown(&self, word: String) -> WordBreakdown {
        let syllables = syllabify(&word)
            .into_iter()
            .map(|text| SyllableStatus {
                available: self.store.has(&text),
                text,
            })
            .collect();
        WordBreakdown { word, syllables }
    }

    /// Turns tokens into the ordered segments to merge.
    pub fn build_segments(&self, tokens: &[Token]) -> Vec<Segment> {
        let rate = self.config.sample_rate;
        let mut segments = Vec::new();

        for token in tokens {
            match token {
                Token::Punctuation(mark) => {
                    segments.push(Segment::new(
                        SegmentKind::PunctuationPause,
                        Waveform::silence(self.config.pause_for(*mark), rate),
                    ));
                }
                Token::Word(raw) => {
                    let word = clean_word(raw);
                    if word.is_empty() {
                        continue;
                    }
                    for syllable in syllabify(&word) {
                        segments.push(self.syllable_segment(&syllable));
                    }
                    segments.push(Segment::new(
                        SegmentKind::WordPause,
                        Waveform::silence(self.config.word_pause, rate),
                    ));
                }
            }
        }

        segments
    }

    fn syllable_segment(&self, syllable: &str) -> Segment {
        match self.store.get(syllable) {
            Some(clip) => Segment::new(
                SegmentKind::Syllable,
                clip.pitch_shifted(self.config.pitch_shift)
                    .normalized(self.config.syllable_peak),
            ),
            None => Segment::new(
                SegmentKind::MissingSyllable,
                Waveform::silence(self.config.missing_syllable_silence, self.config.sample_rate),
            ),
        }
    }

    /// Synthesizes `text`.
    ///
    /// # Errors
    /// - [`SynthError::NothingToSynthesize`] if the text yields no segments
    pub fn synthesize(&self, text: &str) -> SynthResult<Synthesis> {
        let tokens = tokenize(text);
        let words = self.syllabify_text(text);
        let coverage = self.coverage(text);

        for word in &words {
            tracing::debug!(word = %word.word, syllables = %word.display(), "syllabified");
        }
        if !coverage.is_complete() {
            tracing::warn!(
                missing = ?coverage.missing,
                "syllables missing from store, substituting silence"
            );
        }
        tracing::info!(
            total = coverage.total,
            coverage = format_args!("{:.1}%", coverage.coverage),
            "coverage"
        );

        let segments = self.build_segments(&tokens);
        let merged = merge_segments(&segments, self.config.overlap_samples())
            .ok_or(SynthError::NothingToSynthesize)?;
        let waveform = merged.normalized(self.config.output_peak);

        tracing::info!(
            segments = segments.len(),
            samples = waveform.len(),
            seconds = waveform.duration_seconds(),
            "synthesized"
        );

        Ok(Synthesis {
            waveform,
            coverage,
            words,
            segment_count: segments.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hece_audio::SampleStore;
    use hece_lang::Punctuation;
    use pretty_assertions::assert_eq;

    fn store(keys: &[&str]) -> SampleStore {
        SampleStore::from_clips(
            22050,
            keys.iter()
                .map(|k| (k.to_string(), Waveform::new(vec![0.25; 2000], 22050))),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_rate_mismatch() {
        let store = store(&["ba"]);
        let config = SynthConfig {
            sample_rate: 16000,
            ..Default::default()
        };
        let err = Synthesizer::new(&store, config).unwrap_err();
        assert!(matches!(
            err,
            SynthError::SampleRateMismatch {
                store: 22050,
                config: 16000
            }
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let store = store(&["ba"]);
        let config = SynthConfig {
            output_peak: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            Synthesizer::new(&store, config),
            Err(SynthError::InvalidConfig { name: "output_peak", .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_pitch() {
        let store = store(&["ba"]);
        let config = SynthConfig::default().with_pitch_shift(-400.0);
        assert!(matches!(
            Synthesizer::new(&store, config),
            Err(SynthError::InvalidConfig { name: "pitch_shift", .. })
        ));
    }

    #[test]
    fn test_syllabify_text_marks_availability() {
        let store = store(&["ki"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        let words = synth.syllabify_text("Kitap, 123!");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "Kitap");
        assert_eq!(words[0].display(), "ki-[tap]");
        assert!(!words[0].is_complete());

        let words = synth.syllabify_text("ki ki");
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(WordBreakdown::is_complete));
    }

    #[test]
    fn test_segment_layout() {
        let store = store(&["ba"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        let tokens = vec![
            Token::Word("baba".into()),
            Token::Punctuation(Punctuation::Comma),
            Token::Word("ev".into()),
            Token::Word("42".into()),
            Token::Punctuation(Punctuation::Period),
        ];
        let kinds: Vec<_> = synth
            .build_segments(&tokens)
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Syllable,
                SegmentKind::Syllable,
                SegmentKind::WordPause,
                SegmentKind::PunctuationPause,
                SegmentKind::MissingSyllable,
                SegmentKind::WordPause,
                SegmentKind::PunctuationPause,
            ]
        );
    }

    #[test]
    fn test_segment_lengths() {
        let store = store(&["ba"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        let segments = synth.build_segments(&[
            Token::Word("ba".into()),
            Token::Word("ev".into()),
            Token::Punctuation(Punctuation::Question),
            Token::Punctuation(Punctuation::Colon),
        ]);
        let lens: Vec<_> = segments.iter().map(|s| s.waveform.len()).collect();
        // 2000-sample clip, word pause 1764, missing 3307, period 7717, comma 3307
        assert_eq!(lens, vec![2000, 1764, 3307, 1764, 7717, 3307]);
    }

    #[test]
    fn test_syllable_segment_is_normalized() {
        let store = store(&["ba"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        let segments = synth.build_segments(&[Token::Word("ba".into())]);
        assert_eq!(segments[0].waveform.peak(), 0.8);
        // the stored clip is untouched
        assert_eq!(store.get("ba").unwrap().peak(), 0.25);
    }

    #[test]
    fn test_nothing_to_synthesize() {
        let store = store(&["ba"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        for text in ["", "   ", "123 %%"] {
            assert!(matches!(
                synth.synthesize(text),
                Err(SynthError::NothingToSynthesize)
            ));
        }
    }

    #[test]
    fn test_punctuation_only_text_is_silence() {
        let store = store(&["ba"]);
        let synth = Synthesizer::new(&store, SynthConfig::default()).unwrap();
        let out = synth.synthesize("...").unwrap();
        assert_eq!(out.segment_count, 3);
        assert_eq!(out.waveform.peak(), 0.0);
        assert_eq!(out.coverage.total, 0);
    }
}
