//! Agentry - same-origin proxy and terminal dashboard for the agents
//! storefront API.
//!
//! The proxy keeps the upstream API key server-side and re-exposes the
//! agents, users, and chat endpoints under `/api` with a uniform JSON error
//! envelope. The dashboard side of the crate consumes that surface: a
//! storefront browser with count/page reconciliation, a tokens leaderboard,
//! and a chat session with simulated token-by-token playback.

pub mod api;
pub mod chat;
pub mod client;
pub mod config;
pub mod handlers;
pub mod server;
pub mod store;
pub mod upstream;
pub mod wallet;
