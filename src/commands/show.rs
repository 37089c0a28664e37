//! Single-agent detail command.

use anyhow::{Context, Result};

use agentry::client::DashboardClient;

use crate::commands::render;

pub async fn run(agent_id: &str, server: &str) -> Result<()> {
    let client = DashboardClient::new(server);
    let agent = client
        .agent(agent_id)
        .await
        .with_context(|| format!("Failed to get agent '{agent_id}'"))?;

    render::print_agent_detail(&agent);
    Ok(())
}
