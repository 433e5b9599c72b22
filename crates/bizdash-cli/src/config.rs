use anyhow::{Context, Result, anyhow};
use bizdash_core::{DEFAULT_PAGE_SIZE, NavLink, Session};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BIZDASH_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.bizdash (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("BIZDASH_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("bizdash"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".bizdash"));
    }

    Err(anyhow!(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl SessionConfig {
    pub fn session(&self) -> Option<Session> {
        self.user.as_ref().map(|user| Session {
            user: user.clone(),
            roles: self.roles.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Sidebar of the dashboard.
pub fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Dashboard", "/").icon("home"),
        NavLink::new("Staff", "/staff")
            .icon("users")
            .child(NavLink::new("Schedule", "/staff/schedule").icon("calendar"))
            .child(NavLink::new("Time off", "/staff/time-off")),
        NavLink::new("Invoices", "/invoices")
            .icon("receipt")
            .child(NavLink::new("Payments", "/invoices/payments")),
        NavLink::new("Compliance", "/compliance").icon("shield"),
        NavLink::new("Analytics", "/analytics").icon("chart"),
        NavLink::new("Chat", "/chat").icon("message"),
        NavLink::new("Client portal", "/portal").icon("globe"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            session: SessionConfig::default(),
            nav: default_nav(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
