//! Initialize a blogo site in the working directory

use std::fs;
use std::path::Path;

use blogo::config::BlogConfig;
use blogo::core::services::AdminCredentials;
use blogo::output::{OperationResult, OutputMode};
use blogo::paths;

/// Write the site config with hashed admin credentials and create the data directory
pub fn init(
    config_path: Option<&Path>,
    force: bool,
    email: &str,
    password: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let local = paths::local_config();
    let path = config_path.unwrap_or(&local);

    if path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                path.display()
            ),
        };
        result.render(mode);
        return Ok(());
    }

    if email.trim().is_empty() || password.is_empty() {
        anyhow::bail!("Admin email and password must not be empty");
    }

    let mut config = if path.exists() {
        BlogConfig::load_from(path)?
    } else {
        BlogConfig::default()
    };
    config.set_credentials(&AdminCredentials::from_password(email, password));
    config.save(path)?;
    log::debug!("wrote {}", path.display());

    fs::create_dir_all(&config.storage.data_dir)?;
    log::debug!("created {}", config.storage.data_dir.display());

    let result = OperationResult {
        success: true,
        message: format!(
            "Initialized blogo: config at {}, posts in {}",
            path.display(),
            config.posts_path().display()
        ),
    };
    result.render(mode);
    if mode == OutputMode::Human {
        println!("\nNext steps:");
        println!("  blogo post add --title \"Hello\" --content \"First post\"");
        println!("  blogo serve");
    }

    Ok(())
}
