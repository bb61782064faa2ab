//! Non-repeating question selection.

use std::collections::HashSet;

use crate::domain::conversation::{ConversationEntry, MessageRole};

use super::question_bank::EMPTY_POOL_QUESTION;

/// Default number of trailing history entries checked for repeats.
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// Picks the first candidate not asked among the last `window` history entries.
///
/// Only assistant messages count, compared case-insensitively. Once every
/// candidate has been asked recently the first one is returned again.
pub fn select_non_repetitive<'a>(
    candidates: &[&'a str],
    history: &[ConversationEntry],
    window: usize,
) -> &'a str {
    let start = history.len().saturating_sub(window);
    let recent: HashSet<String> = history[start..]
        .iter()
        .filter(|entry| entry.role == MessageRole::Assistant)
        .map(|entry| entry.message.to_lowercase())
        .collect();

    candidates
        .iter()
        .find(|question| !recent.contains(&question.to_lowercase()))
        .or_else(|| candidates.first())
        .copied()
        .unwrap_or(EMPTY_POOL_QUESTION)
}
