//! CLI command implementations.

pub mod account;
pub mod chat;
pub mod leaderboard;
mod render;
pub mod serve;
pub mod show;
pub mod store;
