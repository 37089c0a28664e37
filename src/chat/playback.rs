//! Simulated token-by-token playback of a complete response.

use std::time::Duration;

use tokio::time;

use crate::api::ChatMessage;
use crate::chat::transcript::Transcript;

/// Pause between tokens. Short enough to feel live, long enough to read.
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(50);

/// Split a response the way playback will consume it: on single spaces.
///
/// Consecutive spaces yield empty tokens on purpose; they re-join into the
/// original spacing when accumulated, so the replayed text is exactly the
/// text the upstream sent.
#[must_use]
pub fn split_tokens(response: &str) -> Vec<&str> {
    response.split(' ').collect()
}

/// Replay `response` into the transcript's placeholder message one token at
/// a time, pausing `interval` between tokens.
///
/// Each step publishes the full accumulated prefix, and the final step
/// flips `is_streaming` off together with the last token, so observers
/// never see a finished message that later mutates. `on_update` sees every
/// intermediate message state in order.
pub async fn play_response(
    transcript: &mut Transcript,
    response: &str,
    interval: Duration,
    mut on_update: impl FnMut(&ChatMessage),
) {
    let tokens = split_tokens(response);
    let mut accumulated = String::with_capacity(response.len());

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            accumulated.push(' ');
        }
        accumulated.push_str(token);

        let still_streaming = index + 1 < tokens.len();
        transcript.set_streaming_text(&accumulated, still_streaming);
        if let Some(message) = transcript.messages().last() {
            on_update(message);
        }

        time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;

    #[test]
    fn test_split_on_single_spaces_only() {
        assert_eq!(split_tokens("Hello there friend"), vec!["Hello", "there", "friend"]);
        assert_eq!(split_tokens("double  space"), vec!["double", "", "space"]);
        assert_eq!(split_tokens("line\nbreak stays"), vec!["line\nbreak", "stays"]);
        assert_eq!(split_tokens(""), vec![""]);
    }

    #[tokio::test]
    async fn test_playback_accumulates_prefixes_in_order() {
        let mut transcript = Transcript::new();
        transcript.begin_send("Hi").unwrap();

        let mut snapshots: Vec<(String, bool)> = Vec::new();
        play_response(
            &mut transcript,
            "Hello there friend",
            Duration::ZERO,
            |message| snapshots.push((message.content.clone(), message.is_streaming)),
        )
        .await;
        transcript.finish_send();

        assert_eq!(
            snapshots,
            vec![
                ("Hello".to_string(), true),
                ("Hello there".to_string(), true),
                ("Hello there friend".to_string(), false),
            ]
        );

        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "Hello there friend");
        assert!(!last.is_streaming);
    }

    #[tokio::test]
    async fn test_playback_preserves_double_spaces() {
        let mut transcript = Transcript::new();
        transcript.begin_send("Hi").unwrap();

        play_response(&mut transcript, "a  b", Duration::ZERO, |_| {}).await;

        assert_eq!(transcript.messages().last().unwrap().content, "a  b");
    }

    #[tokio::test]
    async fn test_single_token_response_finishes_immediately() {
        let mut transcript = Transcript::new();
        transcript.begin_send("Hi").unwrap();

        let mut snapshots: Vec<bool> = Vec::new();
        play_response(&mut transcript, "Hello", Duration::ZERO, |message| {
            snapshots.push(message.is_streaming);
        })
        .await;

        assert_eq!(snapshots, vec![false]);
    }
}
