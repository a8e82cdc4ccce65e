use crate::params::WordSplit;

/// Split text on the single ASCII space character (never general whitespace)
/// Collapse drops the empty words produced by consecutive separators;
/// Preserve keeps them
pub fn split_words(text: &str, policy: WordSplit) -> Vec<&str> {
    match policy {
        WordSplit::Collapse => text.split(' ').filter(|word| !word.is_empty()).collect(),
        WordSplit::Preserve => text.split(' ').collect(),
    }
}

/// Join words back with single ASCII spaces
pub fn join_words<I>(words: I) -> String
where
    I: IntoIterator<Item = String>,
{
    words.into_iter().collect::<Vec<_>>().join(" ")
}
