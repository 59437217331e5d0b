// src/bin/issue_token.rs
//! Mints a bearer token for an operator account.
//!
//! Usage: `issue_token <user-id> <username> <role>`
use anyhow::{Context, Result, bail};
use content_hub::application::{dto::TokenSubject, ports::security::TokenManager};
use content_hub::config::AppConfig;
use content_hub::domain::user::{Role, UserId};
use content_hub::infrastructure::security::token::BiscuitTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [user_id, username, role] = args.as_slice() else {
        bail!("usage: issue_token <user-id> <username> <admin|editor|author|viewer>");
    };

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;

    let user_id: i64 = user_id.parse().context("user id must be an integer")?;
    let subject = TokenSubject {
        user_id: UserId::new(user_id)?,
        username: username.clone(),
        role: role.parse::<Role>()?,
    };

    let issued = manager.issue(subject).await?;
    println!("{}", issued.token);
    eprintln!("expires at {}", issued.expires_at);
    Ok(())
}
