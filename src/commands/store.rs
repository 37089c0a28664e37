//! Storefront browsing command.

use anyhow::Result;

use agentry::client::DashboardClient;
use agentry::store::{DEFAULT_PAGE_SIZE, StoreBrowser};

use crate::commands::render;

pub async fn run(page: u32, server: &str) -> Result<()> {
    let client = DashboardClient::new(server);
    let mut browser = StoreBrowser::new(client, DEFAULT_PAGE_SIZE);

    let agents = browser.open(page).await?;

    println!("Agent Store");
    println!();
    if agents.is_empty() {
        println!("No agents found.");
    } else {
        for agent in &agents {
            render::print_agent_card(agent);
            println!();
        }
    }
    render::print_pagination(browser.pager(), agents.len());

    Ok(())
}
