use dotenv::dotenv;
use std::env;
use uuid::Uuid;

use mbet_adera::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    // Deleting the identity again needs SUPABASE_SERVICE_ROLE_KEY
    let compensate = env::var("SUPABASE_SERVICE_ROLE_KEY").is_ok();
    let options = ClientOptions::default().with_compensate_orphaned_identity(compensate);

    let client = MbetAdera::from_env(options)?;
    let provider = client.auth_provider().build();
    let _listener = provider.start().await;

    let email = format!("test-user-{}@example.com", Uuid::new_v4());
    println!("Signing up {}", email);

    let details = ProfileDetails::new("Test Sender", "+251911111111", UserRole::Sender);
    match provider.sign_up(&email, "securePassword123!", details).await {
        Ok(()) => match provider.current_profile() {
            Some(profile) => println!("Created profile: {:?}", profile),
            None => println!("Account created, confirm the email before signing in"),
        },
        Err(err) => println!("Sign up failed: {}", err.message()),
    }

    Ok(())
}
