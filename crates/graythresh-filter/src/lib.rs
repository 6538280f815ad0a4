//! graythresh-filter - Image filtering operations
//!
//! This crate provides the neighborhood and point operations that do not
//! binarize:
//!
//! - Windowed statistics (min, max, mean, standard deviation)
//! - Rank filtering (min, max, median filters)
//! - Point transforms (logarithmic, linear contrast stretch)
//! - Laplacian sharpening

pub mod edge;
pub mod enhance;
mod error;
pub mod rank;
pub mod windowed;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use edge::laplacian_sharpen;
pub use enhance::{linear_contrast_stretch, log_transform};
pub use rank::{
    BorderFill, RankOptions, max_filter, max_filter_with, median_filter, min_filter,
    min_filter_with,
};
pub use windowed::{
    WindowExtrema, WindowStats, WindowSums, mean_stddev_from_sums, window_extrema, window_stats,
};
