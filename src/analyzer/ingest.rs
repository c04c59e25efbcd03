//! Line-oriented URL ingestion.
//!
//! One URL per line. Blank lines and `#` comments are ignored. Lines that
//! are not UTF-8 or that the analyzer rejects are skipped with a warning,
//! or end the run when `fail_fast` is set. Read errors always propagate.

use std::io::BufRead;
use std::ops::AddAssign;

use crate::analyzer::RequestAnalyzer;
use crate::error::IngestError;

/// Line counts from one or more ingested streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// URLs inserted into the tree.
    pub ingested: usize,
    /// Lines dropped as undecodable or rejected.
    pub skipped: usize,
    /// Blank and comment lines.
    pub ignored: usize,
}

impl AddAssign for IngestStats {
    fn add_assign(&mut self, other: Self) {
        self.ingested += other.ingested;
        self.skipped += other.skipped;
        self.ignored += other.ignored;
    }
}

impl RequestAnalyzer {
    /// Ingest every URL line of `reader`. `input` names the stream in logs
    /// and errors.
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        reader: R,
        input: &str,
        fail_fast: bool,
    ) -> Result<IngestStats, IngestError> {
        let mut stats = IngestStats::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line_no = index + 1;
            let bytes = line.map_err(|error| IngestError::Io {
                input: input.to_string(),
                error,
            })?;

            let text = match std::str::from_utf8(&bytes) {
                Ok(text) => text,
                Err(error) => {
                    let err = IngestError::InvalidUtf8 {
                        input: input.to_string(),
                        line: line_no,
                        error,
                    };
                    skip_or_fail(&mut stats, err, fail_fast)?;
                    continue;
                }
            };

            let url = text.trim();
            if url.is_empty() || url.starts_with('#') {
                stats.ignored += 1;
                continue;
            }

            match self.add_request_url(url) {
                Ok(()) => stats.ingested += 1,
                Err(error) => {
                    let err = IngestError::Rejected {
                        input: input.to_string(),
                        line: line_no,
                        error,
                    };
                    skip_or_fail(&mut stats, err, fail_fast)?;
                }
            }
        }

        tracing::debug!(
            input,
            ingested = stats.ingested,
            skipped = stats.skipped,
            ignored = stats.ignored,
            "Input ingested"
        );
        Ok(stats)
    }
}

fn skip_or_fail(
    stats: &mut IngestStats,
    err: IngestError,
    fail_fast: bool,
) -> Result<(), IngestError> {
    if fail_fast {
        return Err(err);
    }
    stats.skipped += 1;
    tracing::warn!(error = %err, "Skipping line");
    Ok(())
}
