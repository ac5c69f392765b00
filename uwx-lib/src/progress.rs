use std::path::PathBuf;

/// Progress update sent during a directory scan.
///
/// Delivered through a callback so frontends can drive a spinner or
/// progress bar. `Identified` may arrive from several threads at once
/// when the scan runs in parallel.
#[derive(Debug, Clone)]
pub enum ScanProgress {
    /// The walk finished and identification is about to start
    Started {
        /// Number of candidate paths found by the walk
        total: usize,
    },

    /// One candidate path has been routed through the dispatcher
    Identified {
        path: PathBuf,
        /// Whether a strategy produced an entry for it
        recognized: bool,
    },

    /// Split archives and multi-disc sets are being merged
    Grouping,

    /// The scan finished
    Completed {
        /// Number of logical entries after grouping
        entries: usize,
        /// Number of paths no strategy accepted
        unrecognized: usize,
    },
}

impl ScanProgress {
    pub fn started(total: usize) -> Self {
        Self::Started { total }
    }

    pub fn identified(path: impl Into<PathBuf>, recognized: bool) -> Self {
        Self::Identified {
            path: path.into(),
            recognized,
        }
    }
}
