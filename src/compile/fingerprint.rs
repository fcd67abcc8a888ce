use std::fmt;

use xxhash_rust::xxh3::xxh3_64_with_seed;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 64-bit fingerprint of a compiled stylesheet.
///
/// Two stylesheets have equal fingerprints iff (up to hash collisions) they
/// are byte-identical, which makes it cheap to tell whether an edit changed
/// the artifact at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CssFingerprint(pub u64);

impl fmt::Display for CssFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fingerprint stylesheet text.
pub fn fingerprint_css(css: &str) -> CssFingerprint {
    CssFingerprint(xxh3_64_with_seed(css.as_bytes(), XXH3_SEED))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
