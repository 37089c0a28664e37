//! Conversation state and simulated response playback.
//!
//! The upstream chat endpoint answers with the complete response text in
//! one shot. To keep the experience of a live model, the dashboard holds a
//! [`Transcript`] with an explicit single-send state machine and replays
//! each response word by word through [`play_response`].

mod playback;
mod transcript;

pub use playback::{DEFAULT_PLAYBACK_INTERVAL, play_response, split_tokens};
pub use transcript::{SendState, Transcript};
