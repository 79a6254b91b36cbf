use dotenv::dotenv;
use log::info;
use std::env;

use mbet_adera::prelude::*;
use mbet_adera_i18n::MemoryPreferences;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let email = env::var("MBET_ADERA_EMAIL").expect("MBET_ADERA_EMAIL must be set");
    let password = env::var("MBET_ADERA_PASSWORD").expect("MBET_ADERA_PASSWORD must be set");

    let client = MbetAdera::from_env(ClientOptions::default())?;
    let provider = client.auth_provider().build();
    let _listener = provider.start().await;

    info!("Session restored: {}", provider.state().is_authenticated());

    if let Err(err) = provider.sign_in(&email, &password).await {
        println!("Sign in failed: {}", err.message());
        return Ok(());
    }

    let language = Language::load(MemoryPreferences::new());
    let state = provider.state();
    match state.current_profile() {
        Some(profile) => {
            let greeting = language.format(Key::DashboardWelcome, &[("name", &profile.full_name)]);
            println!("{}", greeting);
            println!("Role: {}", language.text(profile.role.label_key()));
            if state.profile.is_stale() {
                println!("(profile may be out of date)");
            }
        }
        None => println!("Signed in as {:?}, but no profile was found", state.user_id()),
    }

    provider.sign_out().await?;

    let mut rx = provider.watch();
    rx.wait_for(|state| state.user.is_none()).await?;
    println!("Signed out");

    Ok(())
}
