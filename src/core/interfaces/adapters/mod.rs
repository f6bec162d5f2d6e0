mod vision_analyzer;

pub use vision_analyzer::VisionAnalyzer;
