use dotenv::dotenv;
use std::env;

use mbet_adera_i18n::{FilePreferences, Key, Language, Locale};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let path = env::var("MBET_ADERA_PREFERENCES")
        .unwrap_or_else(|_| "mbet-adera-preferences.json".to_string());
    let mut language = Language::load(FilePreferences::new(path));

    println!("Saved language: {}", language.locale().native_name());

    for locale in Locale::ALL {
        language.set_locale(*locale)?;
        println!("[{}] {}", locale.code(), language.text(Key::HeroTitle));
        println!("[{}] {}", locale.code(), language.format(Key::DashboardWelcome, &[("name", &"Abebe")]));
    }

    let next = match env::args().nth(1) {
        Some(code) => code.parse::<Locale>()?,
        None => Locale::default(),
    };
    language.set_locale(next)?;
    println!("Language saved as {}", language.locale().native_name());

    Ok(())
}
