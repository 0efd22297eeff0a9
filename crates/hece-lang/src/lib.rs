//! Hece Turkish Text Front End
//!
//! This crate turns written Turkish into the units the synthesizer looks up
//! in its sample store.
//!
//! # Overview
//!
//! - **Case folding** - Turkish-aware lowercasing (`I` -> `ı`, `İ` -> `i`)
//! - **Tokenization** - words and pause-producing punctuation marks
//! - **Syllabification** - vowel-anchored splitting by consonant cluster size
//!
//! # Example
//!
//! ```
//! use hece_lang::{syllabify, tokenize, Token};
//!
//! let tokens = tokenize("Baba evde.");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(syllabify("kitap"), vec!["ki", "tap"]);
//! assert!(matches!(tokens[2], Token::Punctuation(_)));
//! ```
//!
//! # Modules
//!
//! - [`case`]: Turkish lowercasing and the vowel set
//! - [`syllabify`](mod@syllabify): the syllabification rule
//! - [`token`]: tokenizer and word cleaning
//! - [`error`]: the error-code trait shared by every crate in the workspace

pub mod case;
pub mod error;
pub mod syllabify;
pub mod token;

// Re-export commonly used items at the crate root
pub use case::{is_vowel, turkish_lower, VOWELS};
pub use error::{CodedError, ErrorReport};
pub use syllabify::{syllabify, Syllabifier};
pub use token::{clean_word, tokenize, PauseClass, Punctuation, Token};
