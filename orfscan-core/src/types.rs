use std::fmt;

use thiserror::Error;

use crate::constants::CODON_LENGTH;

/// Classification of a codon against the start and stop tables.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::types::CodonCode;
///
/// assert_eq!(CodonCode::Start.as_str(), "START");
/// assert_eq!(CodonCode::from_archive_str("STOP"), CodonCode::Stop);
/// assert_eq!(CodonCode::from_archive_str("stop"), CodonCode::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodonCode {
    /// AUG, GUG or UUG
    Start,
    /// UAA, UAG or UGA
    Stop,
    /// Any other codon
    Plain,
    /// Unrecognized spelling read back from an archive
    Unknown,
}

impl CodonCode {
    /// Archive spelling of this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Plain => "PLAIN",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map an archive spelling back to a code.
    ///
    /// Spellings are matched exactly; anything else becomes [`CodonCode::Unknown`].
    #[must_use]
    pub fn from_archive_str(value: &str) -> Self {
        match value {
            "START" => Self::Start,
            "STOP" => Self::Stop,
            "PLAIN" => Self::Plain,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for CodonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Reading direction of a codon stream.
///
/// `Reverse` is a character reversal of the sequence, not its biological
/// reverse complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right windows starting at offset 0
    Forward,
    /// Windows taken in reverse order, each with its symbols reversed
    Reverse,
    /// Unrecognized spelling read back from an archive
    Unknown,
}

impl Direction {
    /// Archive spelling of this direction
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "FORWARD",
            Self::Reverse => "REVERSE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map an archive spelling back to a direction, [`Direction::Unknown`] if unrecognized
    #[must_use]
    pub fn from_archive_str(value: &str) -> Self {
        match value {
            "FORWARD" => Self::Forward,
            "REVERSE" => Self::Reverse,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified codon.
///
/// `position` is 1-based and refers to the full scanned sequence. Forward
/// codons carry the offset of their first symbol, reverse codons the offset
/// of the window's last symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon {
    /// Start, stop or plain
    pub code: CodonCode,
    /// The three symbols as read in this codon's direction
    pub symbols: [u8; CODON_LENGTH],
    /// 1-based position in the originating sequence
    pub position: usize,
}

impl Codon {
    #[must_use]
    pub const fn new(code: CodonCode, symbols: [u8; CODON_LENGTH], position: usize) -> Self {
        Self {
            code,
            symbols,
            position,
        }
    }

    /// Symbols as text. Codons are built from ASCII input, so this only
    /// falls back to `"???"` for hand-built values.
    #[must_use]
    pub fn symbols_str(&self) -> &str {
        std::str::from_utf8(&self.symbols).unwrap_or("???")
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbols_str(), self.position)
    }
}

/// A closed open reading frame: a start codon through the first in-frame
/// stop codon, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfRecord {
    /// Number of nucleotides covered (codon count times three)
    pub length: usize,
    /// Stream the frame was found in
    pub direction: Direction,
    /// 1-based position of the start codon in the scanned sequence
    pub position_in_supersequence: usize,
    /// Always `true` for records produced by the extractor
    pub is_coding_sequence: bool,
    /// Codons from start through stop
    pub codons: Vec<Codon>,
}

impl OrfRecord {
    /// First codon of the frame, if any
    #[must_use]
    pub fn start_codon(&self) -> Option<&Codon> {
        self.codons.first()
    }

    /// Last codon of the frame, if any
    #[must_use]
    pub fn stop_codon(&self) -> Option<&Codon> {
        self.codons.last()
    }

    /// Concatenated codon symbols in reading order
    #[must_use]
    pub fn symbols(&self) -> String {
        self.codons.iter().map(Codon::symbols_str).collect()
    }
}

/// Error types that can occur while scanning or archiving
#[derive(Error, Debug)]
pub enum OrfScanError {
    /// Growing an accumulation or archive buffer failed
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),
    /// Archive text is not well-formed
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Archive content uses an unrecognized spelling or shape
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Caller broke a documented precondition (e.g. length not a multiple of 3)
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),
    /// Input sequence rejected during preparation
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// Configuration could not be applied
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for OrfScanError {
    fn from(error: std::collections::TryReserveError) -> Self {
        Self::AllocationFailure(error.to_string())
    }
}

impl From<serde_json::Error> for OrfScanError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codon_code_spellings_round_trip() {
        for code in [CodonCode::Start, CodonCode::Stop, CodonCode::Plain] {
            assert_eq!(CodonCode::from_archive_str(code.as_str()), code);
        }
    }

    #[test]
    fn test_unrecognized_spellings_map_to_unknown() {
        assert_eq!(CodonCode::from_archive_str("Start"), CodonCode::Unknown);
        assert_eq!(CodonCode::from_archive_str(""), CodonCode::Unknown);
        assert_eq!(Direction::from_archive_str("BACKWARD"), Direction::Unknown);
        assert_eq!(Direction::from_archive_str("forward"), Direction::Unknown);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "FORWARD");
        assert_eq!(Direction::Reverse.to_string(), "REVERSE");
    }

    #[test]
    fn test_codon_display() {
        let codon = Codon::new(CodonCode::Start, *b"AUG", 1);
        assert_eq!(codon.to_string(), "AUG@1");
        assert_eq!(codon.symbols_str(), "AUG");
    }

    #[test]
    fn test_orf_record_accessors() {
        let record = OrfRecord {
            length: 9,
            direction: Direction::Forward,
            position_in_supersequence: 1,
            is_coding_sequence: true,
            codons: vec![
                Codon::new(CodonCode::Start, *b"AUG", 1),
                Codon::new(CodonCode::Plain, *b"CCC", 4),
                Codon::new(CodonCode::Stop, *b"UAA", 7),
            ],
        };
        assert_eq!(record.start_codon().map(|c| c.code), Some(CodonCode::Start));
        assert_eq!(record.stop_codon().map(|c| c.code), Some(CodonCode::Stop));
        assert_eq!(record.symbols(), "AUGCCCUAA");
    }

    #[test]
    fn test_error_display() {
        let error = OrfScanError::PreconditionViolation("length 10".to_string());
        assert_eq!(error.to_string(), "Precondition violation: length 10");
    }
}
