use serde::Deserialize;

use crate::error::LoadError;

/// Identity strings the shell reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// `None` means "ask the host": window.location in the browser, `localhost` natively.
    pub hostname: Option<String>,
    pub user: String,
    pub repository: String,
    pub email: String,
    pub version: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            user: "guest".to_string(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
            email: author_email(env!("CARGO_PKG_AUTHORS")).unwrap_or_default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::json("config", e))
    }

    pub fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or("localhost")
    }
}

// "Name <mail@host>:Other" -> first address found
fn author_email(authors: &str) -> Option<String> {
    authors.split(':').find_map(|author| {
        let start = author.find('<')?;
        let end = author[start..].find('>')? + start;
        let email = author[start + 1..end].trim();
        (!email.is_empty()).then(|| email.to_string())
    })
}
