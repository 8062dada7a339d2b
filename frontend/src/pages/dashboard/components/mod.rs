pub mod features;
pub mod summary;

pub use features::FeatureGrid;
pub use summary::SummarySection;
