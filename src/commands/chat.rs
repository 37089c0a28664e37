//! Interactive chat command implementation.

use std::io::{Write, stdout};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use agentry::api::Agent;
use agentry::chat::{DEFAULT_PLAYBACK_INTERVAL, Transcript, play_response};
use agentry::client::{DashboardClient, Result as ClientResult};

pub async fn run(
    agent_id: &str,
    wallet_address: &str,
    initial_message: Option<&str>,
    server: &str,
) -> Result<()> {
    let client = DashboardClient::new(server);

    let agent = client
        .agent(agent_id)
        .await
        .with_context(|| format!("Failed to get agent '{agent_id}'"))?;

    ensure_account(&client, wallet_address).await;

    println!("Chat with {} (Ctrl+C or /exit to leave)", agent.name);
    if let Some(domain) = &agent.domain {
        println!("Domain: {domain}");
    }
    if !agent.conversation_starters.is_empty() {
        println!("Try one of:");
        for starter in &agent.conversation_starters {
            println!("  {starter}");
        }
    }
    println!();

    let mut transcript = Transcript::new();

    if let Some(message) = initial_message {
        send_turn(&client, &agent, wallet_address, &mut transcript, message).await;
    }

    run_interactive_loop(&client, &agent, wallet_address, &mut transcript).await
}

/// Make sure the wallet has an account before the first turn.
///
/// Lookup first, create on miss; a duplicate-create 400 or any other
/// failure is tolerated, since the chat endpoint gives the authoritative
/// answer anyway.
async fn ensure_account(client: &DashboardClient, wallet_address: &str) {
    match client.user(wallet_address).await {
        Ok(account) => debug!(tokens = account.tokens, "account found"),
        Err(_) => match client.create_user(wallet_address).await {
            Ok(_) => debug!("account created"),
            Err(e) => debug!(error = %e, "account creation failed; continuing"),
        },
    }
}

/// Run the interactive chat loop against the proxy.
async fn run_interactive_loop(
    client: &DashboardClient,
    agent: &Agent,
    wallet_address: &str,
    transcript: &mut Transcript,
) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut async_stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    loop {
        async_stdout.write_all(b"> ").await?;
        async_stdout.flush().await?;

        let Some(input) = lines.next_line().await? else {
            println!();
            break;
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "/exit" || input == "/quit" {
            break;
        }

        send_turn(client, agent, wallet_address, transcript, input).await;
    }

    Ok(())
}

/// One full turn: record, send, play back.
///
/// A failed send keeps the user's message in the transcript and drops the
/// placeholder, so the same turn can be retried from the prompt.
async fn send_turn(
    client: &DashboardClient,
    agent: &Agent,
    wallet_address: &str,
    transcript: &mut Transcript,
    input: &str,
) {
    let Some(history) = transcript.begin_send(input) else {
        return;
    };

    let sent: ClientResult<String> = client.send_chat(&agent.id, wallet_address, &history).await;
    match sent {
        Ok(response) => {
            println!();
            play_to_stdout(transcript, &response).await;
            transcript.finish_send();
            println!();
            println!();
        }
        Err(e) => {
            transcript.abort_send();
            eprintln!("Error: {e}");
        }
    }
}

/// Replay the response word by word, printing only the newly revealed
/// suffix each step.
async fn play_to_stdout(transcript: &mut Transcript, response: &str) {
    let mut out = stdout();
    let mut printed = 0;

    play_response(
        transcript,
        response,
        DEFAULT_PLAYBACK_INTERVAL,
        |message| {
            let delta = &message.content[printed..];
            printed = message.content.len();
            let _ = write!(out, "{delta}");
            let _ = out.flush();
        },
    )
    .await;
}
