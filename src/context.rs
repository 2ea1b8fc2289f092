use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::ShellConfig;
use crate::error::LoadError;
use crate::theme::{Theme, ThemeCatalog};
use crate::vfs::{CurrentPath, Entry, VirtualFs};

/// Something the page has to do on our behalf after a command returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecialAction {
    ClearScreen,
    OpenUrl { url: String },
    SetTheme { theme: Theme },
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub timestamp: DateTime<Local>,
}

pub struct TerminalContext {
    pub vfs: VirtualFs,
    pub cwd: CurrentPath,
    pub history: Vec<HistoryEntry>,
    pub config: ShellConfig,
    pub themes: ThemeCatalog,
    pub theme: Option<Theme>,
    registry: Option<Arc<crate::command::CommandRegistry>>, // for help
    actions: Vec<SpecialAction>,
}

impl TerminalContext {
    /// Context over the bundled events and themes.
    pub fn new(config: ShellConfig) -> Result<Self, LoadError> {
        Ok(Self::with_parts(VirtualFs::bundled()?, ThemeCatalog::bundled()?, config))
    }

    pub fn with_parts(vfs: VirtualFs, themes: ThemeCatalog, config: ShellConfig) -> Self {
        let theme = themes.default_theme().cloned();
        Self {
            vfs,
            cwd: CurrentPath::default(),
            history: Vec::new(),
            config,
            themes,
            theme,
            registry: None,
            actions: Vec::new(),
        }
    }

    pub fn get_command_registry(&self) -> Option<&Arc<crate::command::CommandRegistry>> {
        self.registry.as_ref()
    }

    pub fn set_command_registry(&mut self, registry: Arc<crate::command::CommandRegistry>) {
        self.registry = Some(registry);
    }

    /// What the cursor points at. Always `Some` unless `cwd` was set by hand.
    pub fn cwd_entry(&self) -> Option<Entry<'_>> {
        self.vfs.lookup(self.cwd.below_root())
    }

    pub fn request(&mut self, action: SpecialAction) {
        self.actions.push(action);
    }

    /// Hand queued actions to the front end.
    pub fn take_actions(&mut self) -> Vec<SpecialAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn record(&mut self, command: &str, output: &str) {
        self.history.push(HistoryEntry {
            command: command.to_string(),
            output: output.to_string(),
            timestamp: Local::now(),
        });
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.config.user, self.config.hostname(), self.cwd)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::vfs::tests::fixture;

    /// Fixture tree, bundled themes, default config, default registry.
    pub(crate) fn test_context() -> TerminalContext {
        let themes = ThemeCatalog::bundled().unwrap();
        let mut ctx = TerminalContext::with_parts(fixture(), themes, ShellConfig::default());
        ctx.set_command_registry(Arc::new(CommandRegistry::default_commands()));
        ctx
    }

    #[test]
    fn test_starts_at_root() {
        let ctx = test_context();
        assert!(ctx.cwd.is_root());
        assert!(matches!(ctx.cwd_entry(), Some(Entry::Dir(_))));
        assert_eq!(ctx.theme.as_ref().map(|t| t.name.as_str()), Some("default"));
    }

    #[test]
    fn test_actions_drain() {
        let mut ctx = test_context();
        ctx.request(SpecialAction::ClearScreen);
        assert_eq!(ctx.take_actions(), vec![SpecialAction::ClearScreen]);
        assert!(ctx.take_actions().is_empty());
    }

    #[test]
    fn test_prompt() {
        let mut ctx = test_context();
        ctx.cwd = ctx.cwd.resolve("events");
        assert_eq!(ctx.prompt(), "guest@localhost:~/events$");
    }

    #[test]
    fn test_special_action_json() {
        let json = serde_json::to_value(SpecialAction::OpenUrl { url: "mailto:a@b".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "open_url", "url": "mailto:a@b" }));
    }

    #[test]
    fn test_bundled_context() {
        assert!(TerminalContext::new(ShellConfig::default()).is_ok());
    }
}
