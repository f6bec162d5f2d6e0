mod openai_vision_analyzer;

pub use openai_vision_analyzer::OpenAiVisionAnalyzer;
