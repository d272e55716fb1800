//! Application state shared by the API handlers and the HTTP server

use anyhow::Context;

use crate::adapters::{JsonPostStore, MemoryPostStore, MemorySessionStore};
use crate::config::BlogConfig;
use crate::core::ports::PostStore;
use crate::core::services::{Analyzer, Authenticator};

/// Presentation and cookie settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Title in the navigation bar
    pub title: String,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Whether the session cookie carries `Secure`
    pub secure_cookies: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        let config = BlogConfig::default();
        Self::from_config(&config)
    }
}

impl SiteSettings {
    /// Settings taken from configuration
    #[must_use]
    pub fn from_config(config: &BlogConfig) -> Self {
        Self {
            title: config.server.site_title.clone(),
            cookie_name: config.session.cookie_name.clone(),
            secure_cookies: config.session.secure,
        }
    }
}

/// Everything a request needs: posts, sessions, analysis
pub struct App {
    /// Post storage
    pub posts: Box<dyn PostStore>,
    /// Admin login and sessions
    pub auth: Authenticator,
    /// Post text analysis
    pub analyzer: Analyzer,
    /// Presentation and cookie settings
    pub site: SiteSettings,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("auth", &self.auth)
            .field("analyzer", &self.analyzer)
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Assemble an app from its parts
    #[must_use]
    pub fn new(posts: Box<dyn PostStore>, auth: Authenticator, site: SiteSettings) -> Self {
        Self {
            posts,
            auth,
            analyzer: Analyzer::default(),
            site,
        }
    }

    /// Build the app described by `config`
    ///
    /// With `ephemeral`, posts are kept in memory and lost on exit.
    pub fn from_config(config: &BlogConfig, ephemeral: bool) -> anyhow::Result<Self> {
        let posts: Box<dyn PostStore> = if ephemeral {
            log::info!("using in-memory post store");
            Box::new(MemoryPostStore::new())
        } else {
            let path = config.posts_path();
            log::info!("using post store {}", path.display());
            let store = JsonPostStore::new(path);
            store.list().context("post store is unreadable")?;
            Box::new(store)
        };

        if !config.credentials().is_configured() {
            log::warn!("no admin credentials configured; run `blogo init` to set them");
        }

        let auth = Authenticator::new(
            config.credentials(),
            Box::new(MemorySessionStore::new()),
            config.session_ttl(),
        );
        log::debug!("admin sessions last {}s", auth.ttl().num_seconds());

        Ok(Self::new(posts, auth, SiteSettings::from_config(config)))
    }
}
