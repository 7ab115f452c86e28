/*!
 * Progress reporting for Git operations
 */

use crate::utils::format_file_size;

/// Trait for reporting clone progress
pub trait ProgressReporter {
    /// Called with progress information while objects are transferred
    fn report(&self, progress: &GitProgress);
}

/// Transfer statistics for a running clone
#[derive(Debug, Clone, Default)]
pub struct GitProgress {
    /// Total number of objects to download
    pub total_objects: usize,
    /// Number of received objects
    pub received_objects: usize,
    /// Total number of deltas
    pub total_deltas: usize,
    /// Number of indexed deltas
    pub indexed_deltas: usize,
    /// Number of bytes received
    pub received_bytes: usize,
}

impl GitProgress {
    pub(crate) fn from_stats(stats: &git2::Progress<'_>) -> Self {
        Self {
            total_objects: stats.total_objects(),
            received_objects: stats.received_objects(),
            total_deltas: stats.total_deltas(),
            indexed_deltas: stats.indexed_deltas(),
            received_bytes: stats.received_bytes(),
        }
    }

    /// Percentage of objects received so far
    pub fn percentage(&self) -> u8 {
        if self.total_objects == 0 {
            return 0;
        }

        ((self.received_objects * 100) / self.total_objects) as u8
    }

    /// Received bytes in human-readable form
    pub fn formatted_bytes(&self) -> String {
        format_file_size(self.received_bytes as u64)
    }

    /// One-line status suitable for a spinner message
    pub fn message(&self) -> String {
        if self.total_objects > 0 && self.received_objects == self.total_objects {
            format!(
                "Resolving deltas {}/{}",
                self.indexed_deltas, self.total_deltas
            )
        } else {
            format!(
                "Receiving objects {}% ({}/{}), {}",
                self.percentage(),
                self.received_objects,
                self.total_objects,
                self.formatted_bytes()
            )
        }
    }
}

// Closures make convenient reporters
impl<F> ProgressReporter for F
where
    F: Fn(&GitProgress),
{
    fn report(&self, progress: &GitProgress) {
        self(progress)
    }
}
