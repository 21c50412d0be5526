// Core algorithm exports
pub mod alert;
pub mod detector;
pub mod distance;
pub mod error;
pub mod normalize;
pub mod policy;
pub mod scoring;

pub use alert::format_alert;
pub use detector::DuplicateDetector;
pub use distance::distance;
pub use error::CheckError;
pub use normalize::normalize;
pub use policy::{sort_matches, AssessmentPolicy};
pub use scoring::{normalized_similarity, similarity};
