pub mod bonus;
pub mod category;
pub mod identity;
pub mod scoring_engine;
pub mod standings;
pub mod time_normalizer;
