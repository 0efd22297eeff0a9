//! Built-in Turkish sample sentences.

/// Sentence synthesized when no text is given.
pub const DEFAULT_TEXT: &str = "Baba evde kırmızı ve mavi kitapları okuyor.";

/// Short sentences that exercise common syllables.
pub const EXAMPLE_SENTENCES: [&str; 8] = [
    "Baba evde kırmızı ve mavi kitapları okuyor.",
    "Küçük köpek bahçede koşuyor ve top oynuyor.",
    "Ayşe ve Mehmet pazar günü sinemaya gittiler.",
    "Öğretmen sınıfta yeni konuları anlatıyor.",
    "Güneş sabah erken doğar ve ışığıyla ısıtır.",
    "Zeytin ağaçları bahçede yavaşça büyüyor.",
    "Yağmur pencerelere hafifçe vuruyor ve sesi güzel.",
    "Jale ve Yusuf tatilde yeni yerler keşfettiler.",
];

/// Returns the 1-based example sentence `n`, if it exists.
pub fn example(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| EXAMPLE_SENTENCES.get(i).copied())
}
