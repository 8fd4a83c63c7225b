//! Page-size configurations.

use std::fmt;

use crate::common::config::reference_len;

/// Geometry of one sweep step.
///
/// With a page size `p > 0`, a process of `process_size` units spans
/// `ceil(process_size / p)` pages and RAM of `ram_size` units holds
/// `floor(ram_size / p)` frames. A page size of 0 has no such geometry and
/// is reported as not applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageConfig {
    /// Page size 0: nothing to simulate.
    Degenerate,

    /// A usable configuration.
    Paged {
        /// Size of one page, in the same units as RAM and process size.
        page_size: usize,
        /// Number of distinct pages in a process.
        page_count: usize,
        /// Number of pages RAM can hold at once.
        frame_capacity: usize,
    },
}

impl PageConfig {
    /// Derive the configuration for `page_size`.
    ///
    /// # Example
    /// ```
    /// use pagesim::sim::PageConfig;
    ///
    /// let config = PageConfig::derive(10, 7, 3);
    /// assert_eq!(config.page_count(), Some(3));      // ceil(7 / 3)
    /// assert_eq!(config.frame_capacity(), Some(3));  // floor(10 / 3)
    /// assert!(PageConfig::derive(10, 7, 0).is_degenerate());
    /// ```
    pub fn derive(ram_size: usize, process_size: usize, page_size: usize) -> Self {
        if page_size == 0 {
            return PageConfig::Degenerate;
        }
        PageConfig::Paged {
            page_size,
            page_count: process_size.div_ceil(page_size),
            frame_capacity: ram_size / page_size,
        }
    }

    /// True for [`PageConfig::Degenerate`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, PageConfig::Degenerate)
    }

    /// Page size, `0` for the degenerate configuration.
    pub fn page_size(&self) -> usize {
        match self {
            PageConfig::Degenerate => 0,
            PageConfig::Paged { page_size, .. } => *page_size,
        }
    }

    /// Number of pages in a process, if defined.
    pub fn page_count(&self) -> Option<usize> {
        match self {
            PageConfig::Degenerate => None,
            PageConfig::Paged { page_count, .. } => Some(*page_count),
        }
    }

    /// Number of frames in RAM, if defined.
    pub fn frame_capacity(&self) -> Option<usize> {
        match self {
            PageConfig::Degenerate => None,
            PageConfig::Paged { frame_capacity, .. } => Some(*frame_capacity),
        }
    }

    /// Length of each process's reference string, if defined.
    pub fn reference_len(&self) -> Option<usize> {
        self.page_count().map(reference_len)
    }
}

impl fmt::Display for PageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageConfig::Degenerate => write!(f, "PageConfig(degenerate)"),
            PageConfig::Paged {
                page_size,
                page_count,
                frame_capacity,
            } => write!(
                f,
                "PageConfig {{ page_size: {}, pages: {}, frames: {} }}",
                page_size, page_count, frame_capacity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_rounds_pages_up_and_frames_down() {
        let config = PageConfig::derive(9, 10, 4);
        assert_eq!(
            config,
            PageConfig::Paged {
                page_size: 4,
                page_count: 3,
                frame_capacity: 2,
            }
        );
        assert_eq!(config.reference_len(), Some(300));
    }

    #[test]
    fn test_derive_exact_division() {
        let config = PageConfig::derive(8, 8, 2);
        assert_eq!(config.page_count(), Some(4));
        assert_eq!(config.frame_capacity(), Some(4));
        assert_eq!(config.page_size(), 2);
    }

    #[test]
    fn test_degenerate() {
        let config = PageConfig::derive(8, 8, 0);
        assert!(config.is_degenerate());
        assert_eq!(config.page_size(), 0);
        assert_eq!(config.page_count(), None);
        assert_eq!(config.frame_capacity(), None);
        assert_eq!(config.reference_len(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PageConfig::derive(10, 10, 5).to_string(),
            "PageConfig { page_size: 5, pages: 2, frames: 2 }"
        );
        assert_eq!(PageConfig::Degenerate.to_string(), "PageConfig(degenerate)");
    }
}
