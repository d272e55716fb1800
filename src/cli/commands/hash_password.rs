//! Produce a salted password hash for configuration

use blogo::core::services::AdminCredentials;
use blogo::output::OutputMode;

/// Print `salt` and `password_hash` lines for the `[admin]` section
pub fn hash_password(password: &str, mode: OutputMode) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    let credentials = AdminCredentials::from_password("", password);

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "salt": credentials.salt,
                "password_hash": credentials.password_hash,
            })
        );
    } else {
        println!("# Add to the [admin] section of blogo.toml");
        println!("salt = \"{}\"", credentials.salt);
        println!("password_hash = \"{}\"", credentials.password_hash);
    }
    Ok(())
}
