//! Shared tokenization and feature hashing for the built-in providers.

/// Lowercase alphanumeric terms.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|s| s.trim_matches('\''))
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Character trigrams of a term, padded with boundary markers.
pub(crate) fn char_trigrams(term: &str) -> Vec<String> {
    let padded: Vec<char> = std::iter::once('<')
        .chain(term.chars())
        .chain(std::iter::once('>'))
        .collect();
    padded
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

/// FNV-1a bucket for a feature.
pub(crate) fn bucket(feature: &str, dims: usize) -> usize {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in feature.as_bytes() {
        h ^= *b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    (h % dims as u64) as usize
}

/// Sign bit derived from a second hash, so collisions partly cancel.
pub(crate) fn sign(feature: &str) -> f32 {
    let mut h: u32 = 0x811c9dc5;
    for b in feature.as_bytes().iter().rev() {
        h ^= *b as u32;
        h = h.wrapping_mul(0x01000193);
    }
    if h & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Scale to unit length in place. Zero vectors stay zero.
pub(crate) fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec.iter_mut() {
            *v /= norm;
        }
    }
}
