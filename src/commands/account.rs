//! Wallet account command.

use anyhow::Result;

use agentry::client::{ClientError, DashboardClient};
use agentry::wallet;

pub async fn run(wallet_address: &str, create: bool, server: &str) -> Result<()> {
    let client = DashboardClient::new(server);

    if create {
        match client.create_user(wallet_address).await {
            Ok(_) => println!("Account created for {}", wallet::truncate(wallet_address)),
            // The upstream answers 400 when the account already exists;
            // creation is idempotent from this side.
            Err(ClientError::ApiError {
                status: 400,
                message,
            }) => println!("Account already present ({message})"),
            Err(e) => return Err(e.into()),
        }
    }

    let account = client.user(wallet_address).await?;
    println!("Wallet : {}", wallet::truncate(wallet_address));
    println!("Tokens : {}", account.tokens);

    Ok(())
}
