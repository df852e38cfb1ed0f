//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wristo_domain::ClientSettings;
use wristo_infrastructure::config::{
    ENV_API_BASE_URL, ENV_API_TIMEOUT_MS, ENV_API_TOKEN, ENV_REDIRECT_DELAY_MS, ENV_SSO_BASE_URL,
    ENV_SSO_CLIENT_ID, ENV_SSO_CLIENT_SECRET, ENV_SSO_REDIRECT_URI,
};
use wristo_infrastructure::{ConfigError, load_settings_with};

/// `wristo` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "wristo", about = "Browse and buy Garmin watch faces from the terminal", version)]
pub struct Cli {
    /// Backend API root.
    #[arg(long, value_name = "url", env = ENV_API_BASE_URL, global = true)]
    pub api_base_url: Option<String>,
    /// Request timeout in milliseconds.
    #[arg(long, value_name = "ms", env = ENV_API_TIMEOUT_MS, global = true)]
    pub api_timeout_ms: Option<String>,
    /// Bearer token used while signed out.
    #[arg(long, value_name = "token", env = ENV_API_TOKEN, hide_env_values = true, global = true)]
    pub api_token: Option<String>,
    /// SSO provider root.
    #[arg(long, value_name = "url", env = ENV_SSO_BASE_URL, global = true)]
    pub sso_base_url: Option<String>,
    /// SSO client id.
    #[arg(long, value_name = "id", env = ENV_SSO_CLIENT_ID, global = true)]
    pub sso_client_id: Option<String>,
    /// SSO client secret.
    #[arg(long, value_name = "secret", env = ENV_SSO_CLIENT_SECRET, hide_env_values = true, global = true)]
    pub sso_client_secret: Option<String>,
    /// Where the SSO provider sends the user back.
    #[arg(long, value_name = "url", env = ENV_SSO_REDIRECT_URI, global = true)]
    pub sso_redirect_uri: Option<String>,
    /// Delay before the login redirect in milliseconds.
    #[arg(long, value_name = "ms", env = ENV_REDIRECT_DELAY_MS, global = true)]
    pub redirect_delay_ms: Option<String>,
    /// Client state file. Defaults to the platform data directory.
    #[arg(long, value_name = "path", env = "WRISTO_STORAGE_PATH", global = true)]
    pub storage: Option<PathBuf>,
    /// Keep the session and device selection in memory only.
    #[arg(long, conflicts_with = "storage", global = true)]
    pub ephemeral: bool,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Storefront operations.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Best-selling products.
    Hot,
    /// Newest products.
    New,
    /// Product series.
    Series {
        /// Show one series by slug instead of the list.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Search products by keyword.
    Search {
        /// Search term.
        keyword: String,
        /// 1-based page.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Results per page.
        #[arg(long, default_value_t = 24)]
        page_size: u32,
    },
    /// One product with related products.
    Product {
        /// Product app id.
        app_id: i64,
    },
    /// One bundle.
    Bundle {
        /// Bundle id.
        id: i64,
    },
    /// Supported watch models.
    Devices,
    /// Scope product listings to a watch model.
    SelectDevice {
        /// Device id from `devices`.
        id: i64,
    },
    /// Stop scoping product listings.
    ClearDevice,
    /// Active subscription plans.
    Plans,
    /// Redeem a purchase code shown on the watch.
    Redeem {
        /// Purchase code.
        code: String,
    },
    /// Blog posts.
    Blog {
        /// Translation language.
        #[arg(long)]
        lang: Option<String>,
        /// Show one post by slug instead of the list.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Print the SSO login URL.
    LoginUrl,
    /// Finish SSO sign-in with the code from the callback URL.
    Login {
        /// One-time code.
        code: String,
    },
    /// Signed-in user.
    Whoami,
    /// Sign out.
    Logout,
}

impl Cli {
    /// Builds client settings from the parsed options.
    ///
    /// # Errors
    ///
    /// Returns an error if an option holds a malformed value.
    pub fn settings(&self) -> Result<ClientSettings, ConfigError> {
        load_settings_with(|var| self.option(var))
    }

    fn option(&self, var: &str) -> Option<String> {
        let value = match var {
            ENV_API_BASE_URL => &self.api_base_url,
            ENV_API_TIMEOUT_MS => &self.api_timeout_ms,
            ENV_API_TOKEN => &self.api_token,
            ENV_SSO_BASE_URL => &self.sso_base_url,
            ENV_SSO_CLIENT_ID => &self.sso_client_id,
            ENV_SSO_CLIENT_SECRET => &self.sso_client_secret,
            ENV_SSO_REDIRECT_URI => &self.sso_redirect_uri,
            ENV_REDIRECT_DELAY_MS => &self.redirect_delay_ms,
            _ => return None,
        };
        value.clone()
    }
}
