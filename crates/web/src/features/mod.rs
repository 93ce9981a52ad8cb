pub mod meets;
pub mod scoring_rules;
pub mod standings;
