use crate::constants::{CODON_LENGTH, START_CODONS, STOP_CODONS};
use crate::types::CodonCode;

/// Codon table used to look up a codon's [`CodonCode`].
///
/// The tables are immutable statics handed in at construction, so one
/// classifier can be shared freely between scans.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::sequence::CodonClassifier;
/// use orfscan_core::types::CodonCode;
///
/// let classifier = CodonClassifier::default();
/// assert_eq!(classifier.classify(b"AUG"), CodonCode::Start);
/// assert_eq!(classifier.classify(b"uga"), CodonCode::Stop);
/// assert_eq!(classifier.classify(b"CCC"), CodonCode::Plain);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodonClassifier {
    start_codons: &'static [[u8; CODON_LENGTH]],
    stop_codons: &'static [[u8; CODON_LENGTH]],
}

impl CodonClassifier {
    /// Build a classifier over custom tables.
    ///
    /// When a codon appears in both tables the start table wins.
    #[must_use]
    pub const fn new(
        start_codons: &'static [[u8; CODON_LENGTH]],
        stop_codons: &'static [[u8; CODON_LENGTH]],
    ) -> Self {
        Self {
            start_codons,
            stop_codons,
        }
    }

    /// Classify a codon, ignoring ASCII case.
    ///
    /// Input that is not exactly three symbols long is [`CodonCode::Plain`].
    #[must_use]
    pub fn classify(&self, codon: &[u8]) -> CodonCode {
        if codon.len() != CODON_LENGTH {
            return CodonCode::Plain;
        }
        if contains_codon(self.start_codons, codon) {
            CodonCode::Start
        } else if contains_codon(self.stop_codons, codon) {
            CodonCode::Stop
        } else {
            CodonCode::Plain
        }
    }

    #[must_use]
    pub const fn start_codons(&self) -> &'static [[u8; CODON_LENGTH]] {
        self.start_codons
    }

    #[must_use]
    pub const fn stop_codons(&self) -> &'static [[u8; CODON_LENGTH]] {
        self.stop_codons
    }
}

impl Default for CodonClassifier {
    fn default() -> Self {
        Self::new(&START_CODONS, &STOP_CODONS)
    }
}

fn contains_codon(table: &[[u8; CODON_LENGTH]], codon: &[u8]) -> bool {
    table
        .iter()
        .any(|entry| entry.as_slice().eq_ignore_ascii_case(codon))
}

/// Classify a codon against the standard start and stop tables
#[must_use]
pub fn classify(codon: &[u8]) -> CodonCode {
    CodonClassifier::default().classify(codon)
}
