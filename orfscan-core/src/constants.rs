// =============================================================================
// =============================================================================

/// Version string for orfscan
pub const VERSION: &str = "0.1.0";

// =============================================================================
// =============================================================================

/// Length of a codon in nucleotides
pub const CODON_LENGTH: usize = 3;

/// Nucleotide alphabet accepted by the scanner (RNA, uppercase)
pub const NUCLEOTIDE_ALPHABET: &[u8] = b"ACGU";

/// Default upper bound on the length of a scanned sequence
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 10_000;

// =============================================================================
// =============================================================================

/// Recognized start codons
pub static START_CODONS: [[u8; CODON_LENGTH]; 3] = [*b"AUG", *b"GUG", *b"UUG"];

/// Recognized stop codons
pub static STOP_CODONS: [[u8; CODON_LENGTH]; 3] = [*b"UAA", *b"UAG", *b"UGA"];

// =============================================================================
// =============================================================================

/// Archive location used when no path is configured, and the fallback
/// when the configured path cannot be opened
pub const DEFAULT_ARCHIVE_PATH: &str = "orf_history.json";

/// Header used for sequences that arrive without a FASTA identifier
pub const DEFAULT_SEQUENCE_HEADER: &str = "orfscan_seq_1";
