pub mod engine;
pub mod pipeline;
pub mod scoring;

pub use engine::AnalysisEngine;
pub use pipeline::ProfileAnalyzer;
pub use scoring::ScoringConfig;
