use crate::models::ParsedEntry;

/// One stateless way of reading entry lines out of a classification block.
///
/// Matchers are tried in order by `EntryExtractor`; a matcher that finds
/// nothing returns an empty vector so the next one gets a chance.
pub trait EntryMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Vec<ParsedEntry>;
}
