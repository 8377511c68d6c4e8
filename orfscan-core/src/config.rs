use std::path::PathBuf;

use crate::constants::{DEFAULT_ARCHIVE_PATH, DEFAULT_MAX_SEQUENCE_LENGTH};

/// Output format options for rendering ORF records.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::config::{OutputFormat, ScanConfig};
///
/// let config = ScanConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one block per record.
    Text,

    /// Tab-delimited table, one line per record.
    ///
    /// Columns: index, direction, position, length, codon count, symbols.
    Tsv,

    /// General Feature Format version 3.
    ///
    /// Reverse records use the `.` strand since the reverse reading is not
    /// a biological strand.
    Gff,

    /// The archive JSON encoding.
    Json,
}

/// When the session writes its record store to the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePolicy {
    /// Persist once, when the session finishes.
    #[default]
    OnExit,
    /// Persist after every analyzed sequence.
    EachTurn,
}

/// Configuration settings for scanning sessions.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use orfscan_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.max_sequence_length, 10_000);
/// ```
///
/// ## Persist every turn to a custom archive
///
/// ```rust
/// use orfscan_core::config::{SavePolicy, ScanConfig};
///
/// let config = ScanConfig {
///     archive_path: "runs/history.json".into(),
///     save_policy: SavePolicy::EachTurn,
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Longest sequence accepted by [`prepare_sequence`](crate::sequence::prepare_sequence).
    ///
    /// **Default**: 10 000 nucleotides
    pub max_sequence_length: usize,

    /// Archive file read at session start and written per [`SavePolicy`].
    ///
    /// **Default**: `orf_history.json`
    pub archive_path: PathBuf,

    /// Path tried when `archive_path` cannot be opened.
    ///
    /// **Default**: `orf_history.json` in the working directory
    pub fallback_archive_path: PathBuf,

    /// When to write the archive.
    ///
    /// **Default**: [`SavePolicy::OnExit`]
    pub save_policy: SavePolicy,

    /// Format used when rendering records for display.
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Suppress informational progress messages.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Number of threads for batch scans of many sequences.
    ///
    /// Set to `None` to let Rayon decide.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            fallback_archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            save_policy: SavePolicy::OnExit,
            output_format: OutputFormat::Text,
            quiet: false,
            num_threads: None,
        }
    }
}
