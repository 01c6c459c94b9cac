pub mod landing;
pub mod prediction;
pub mod stats;
pub mod thresholds;
pub mod timeline;
