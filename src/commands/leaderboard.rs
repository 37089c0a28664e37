//! Token leaderboard command.

use anyhow::Result;

use agentry::client::DashboardClient;
use agentry::store::{DEFAULT_PAGE_SIZE, ranked_by_tokens};
use agentry::wallet;

pub async fn run(server: &str) -> Result<()> {
    let client = DashboardClient::new(server);
    let page = client.agents_page(1, DEFAULT_PAGE_SIZE).await?;
    let ranked = ranked_by_tokens(page.agents);

    if ranked.is_empty() {
        println!("No agents on the leaderboard yet.");
        return Ok(());
    }

    println!("Leaderboard");
    println!();
    for (index, agent) in ranked.iter().enumerate() {
        let rank = index + 1;
        let medal = match rank {
            1 => "🥇 ",
            2 => "🥈 ",
            3 => "🥉 ",
            _ => "   ",
        };
        println!(
            "{medal}#{rank:<3} {:<24} {:>10} tokens   {}",
            agent.name,
            agent.tokens,
            wallet::truncate(&agent.owner_wallet)
        );
    }

    Ok(())
}
