//! The generation round: fixed fan-out, ordered fan-in.
//!
//! Exactly three requests are issued concurrently, each in its own
//! task with no shared mutable state. A request that fails is converted
//! to a missing ordinal and never disturbs its siblings. The join
//! waits for all tasks, then discards completion order entirely:
//! candidates are sorted by the variation index assigned at issue time.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::flow::Candidate;
use crate::provider::{GenerationProvider, GenerationRequest};
use crate::theme::{Theme, ThemeCatalog};

/// How many variations one round requests.
pub const VARIATION_COUNT: u32 = 3;

/// A round ready to run, tagged with the session it belongs to.
#[derive(Debug)]
pub struct GenerationRound {
    pub round_id: u64,
    pub requests: Vec<GenerationRequest>,
}

impl GenerationRound {
    pub(crate) fn new(round_id: u64, prompt: &str) -> Self {
        let requests = (1..=VARIATION_COUNT)
            .map(|i| GenerationRequest::new(prompt, i, None))
            .collect();
        Self { round_id, requests }
    }
}

/// What a round produced. Empty `candidates` means total failure; the
/// controller substitutes fallback content so reviewing is never empty.
#[derive(Debug)]
pub struct RoundOutcome {
    pub round_id: u64,
    pub candidates: Vec<Candidate>,
}

impl RoundOutcome {
    pub fn is_total_failure(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Run a round to completion: fan out one task per request, join all,
/// order by ordinal, assign catalog themes where no hint was given.
pub async fn run_round<P>(
    provider: Arc<P>,
    catalog: &ThemeCatalog,
    round: GenerationRound,
) -> RoundOutcome
where
    P: GenerationProvider + 'static,
{
    let round_id = round.round_id;

    let tasks: Vec<_> = round
        .requests
        .into_iter()
        .map(|request| {
            let provider = Arc::clone(&provider);
            tokio::spawn(async move {
                let ordinal = request.variation_index;
                match provider.generate(&request).await {
                    Ok(markup) => Some((ordinal, markup, request.theme_hint)),
                    Err(err) => {
                        debug!(variation = ordinal, error = %err, "generation request failed");
                        None
                    }
                }
            })
        })
        .collect();

    let mut results: Vec<(u32, String, Option<Theme>)> = Vec::new();
    for joined in join_all(tasks).await {
        match joined {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {}
            // A panicked task counts as one more failed ordinal.
            Err(err) => warn!(error = %err, "generation task aborted"),
        }
    }

    // Completion order is non-deterministic and must not leak into the
    // visible list.
    results.sort_by_key(|(ordinal, _, _)| *ordinal);

    let candidates = results
        .into_iter()
        .map(|(ordinal, markup, hint)| {
            let theme = hint.unwrap_or_else(|| catalog.theme_for(ordinal));
            Candidate::new(ordinal, markup, theme)
        })
        .collect();

    RoundOutcome {
        round_id,
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::time::Duration;

    /// Provider whose per-ordinal behavior (failure, artificial delay)
    /// is scripted up front.
    struct ScriptedProvider {
        fail: HashSet<u32>,
        delay_ms: HashMap<u32, u64>,
    }

    impl ScriptedProvider {
        fn succeeding() -> Self {
            Self {
                fail: HashSet::new(),
                delay_ms: HashMap::new(),
            }
        }

        fn failing(ordinals: &[u32]) -> Self {
            Self {
                fail: ordinals.iter().copied().collect(),
                delay_ms: HashMap::new(),
            }
        }

        fn with_delay(mut self, ordinal: u32, ms: u64) -> Self {
            self.delay_ms.insert(ordinal, ms);
            self
        }
    }

    #[async_trait]
    impl GenerationProvider for ScriptedProvider {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
            if let Some(ms) = self.delay_ms.get(&request.variation_index) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.fail.contains(&request.variation_index) {
                return Err(ProviderError::Transport("scripted failure".into()));
            }
            Ok(format!(
                "<html><body>variation {}</body></html>",
                request.variation_index
            ))
        }
    }

    fn ordinals(outcome: &RoundOutcome) -> Vec<u32> {
        outcome.candidates.iter().map(|c| c.ordinal).collect()
    }

    #[tokio::test]
    async fn candidates_are_ordinal_ordered_regardless_of_completion_order() {
        // Ordinal 1 finishes last, 3 first.
        let provider = Arc::new(
            ScriptedProvider::succeeding()
                .with_delay(1, 60)
                .with_delay(2, 30),
        );
        let round = GenerationRound::new(7, "todo list app");
        let outcome = run_round(provider, &ThemeCatalog::default(), round).await;

        assert_eq!(outcome.round_id, 7);
        assert_eq!(ordinals(&outcome), vec![1, 2, 3]);
        assert!(outcome.candidates[2].markup.contains("variation 3"));
    }

    #[tokio::test]
    async fn one_failure_leaves_the_other_ordinals_intact() {
        let provider = Arc::new(ScriptedProvider::failing(&[2]));
        let round = GenerationRound::new(1, "todo list app");
        let outcome = run_round(provider, &ThemeCatalog::default(), round).await;

        assert_eq!(ordinals(&outcome), vec![1, 3]);
        assert!(!outcome.is_total_failure());
    }

    #[tokio::test]
    async fn all_failures_produce_an_empty_outcome() {
        let provider = Arc::new(ScriptedProvider::failing(&[1, 2, 3]));
        let round = GenerationRound::new(1, "todo list app");
        let outcome = run_round(provider, &ThemeCatalog::default(), round).await;

        assert!(outcome.is_total_failure());
    }

    #[tokio::test]
    async fn themes_are_assigned_by_ordinal_from_the_catalog() {
        let provider = Arc::new(ScriptedProvider::succeeding());
        let catalog = ThemeCatalog::default();
        let round = GenerationRound::new(1, "todo list app");
        let outcome = run_round(provider, &catalog, round).await;

        for candidate in &outcome.candidates {
            assert_eq!(candidate.theme, catalog.theme_for(candidate.ordinal));
        }
    }

    #[test]
    fn a_round_issues_exactly_three_requests() {
        let round = GenerationRound::new(1, "todo list app");
        let indices: Vec<u32> = round.requests.iter().map(|r| r.variation_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(round.requests.iter().all(|r| r.theme_hint.is_none()));
        assert!(round.requests.iter().all(|r| r.prompt == "todo list app"));
    }
}
