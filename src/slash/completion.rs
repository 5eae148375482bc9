//! Fuzzy completion over registered command names.

use super::help::HELP_COMMAND;
use super::registry::CommandRegistry;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub name: String,
    /// `name - description`, or just the name when there is no description
    pub display: String,
    pub source: String,
    pub score: i64,
}

pub struct CompletionProvider {
    registry: Arc<CommandRegistry>,
    matcher: SkimMatcherV2,
}

impl CompletionProvider {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self {
            registry,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Completion items for `query`.
    ///
    /// An empty query returns every command in name order. Otherwise only
    /// fuzzy matches are returned, best first.
    pub fn complete(&self, query: &str) -> Vec<CompletionItem> {
        let query = query.trim().trim_start_matches('\\');
        let snapshot = self.registry.snapshot();

        let mut items: Vec<CompletionItem> = snapshot
            .commands()
            .iter()
            .filter_map(|cmd| {
                let score = if query.is_empty() {
                    0
                } else {
                    self.matcher.fuzzy_match(&cmd.name, query)?
                };
                let display = if cmd.description.is_empty() {
                    cmd.name.clone()
                } else {
                    format!("{} - {}", cmd.name, cmd.description)
                };
                Some(CompletionItem {
                    name: cmd.name.clone(),
                    display,
                    source: cmd.source.clone(),
                    score,
                })
            })
            .collect();

        items.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        items
    }
}

/// Up to `limit` names from `candidates` resembling `name`, best first.
///
/// The built-in help command is always considered.
pub fn suggest_similar<'a, I>(name: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &str)> = candidates
        .into_iter()
        .chain(std::iter::once(HELP_COMMAND))
        .filter_map(|candidate| {
            matcher
                .fuzzy_match(candidate, name)
                .map(|score| (score, candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
