//! Display-order ranking.

use crate::api::Agent;

/// Order agents by token count, highest first.
///
/// The sort is stable, so agents with equal counts keep their fetched
/// order. This is display-only and ranks only the agents actually fetched;
/// the upstream has no sort parameter, so it is never a global rank.
#[must_use]
pub fn ranked_by_tokens(mut agents: Vec<Agent>) -> Vec<Agent> {
    agents.sort_by(|a, b| b.tokens.cmp(&a.tokens));
    agents
}
