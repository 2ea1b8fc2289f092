// wasm fake terminal for the LUG site
// browse club events with ls/cd/cat, nothing here touches a real disk
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
#[cfg(target_arch = "wasm32")]
mod logger;
pub mod theme;
pub mod vfs;

use std::sync::Arc;

use command::CommandRegistry;
use config::ShellConfig;
use context::{SpecialAction, TerminalContext};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// main terminal struct - keeps state between calls
#[wasm_bindgen]
pub struct Terminal {
    ctx: TerminalContext,
    registry: Arc<CommandRegistry>,
}

// response wrapper for js comms
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub special_action: Vec<SpecialAction>,
}

impl Terminal {
    /// Shared by both constructors and the native REPL.
    pub fn from_config(mut config: ShellConfig) -> Result<Terminal, error::LoadError> {
        #[cfg(target_arch = "wasm32")]
        logger::init(log::LevelFilter::Info);

        if config.hostname.is_none() {
            config.hostname = page_hostname();
        }
        log::info!("starting terminal as {}@{}", config.user, config.hostname());

        let registry = Arc::new(CommandRegistry::default_commands());
        let mut ctx = TerminalContext::new(config)?;
        ctx.set_command_registry(Arc::clone(&registry));
        Ok(Terminal { ctx, registry })
    }

    /// Run one line and collect whatever the page needs to do about it.
    pub fn run(&mut self, input: &str) -> CommandResponse {
        let result = command::run_command(input, &mut self.ctx, &self.registry);
        let special_action = self.ctx.take_actions();
        match result {
            Ok(output) => CommandResponse { success: true, output, special_action },
            Err(e) => CommandResponse { success: false, output: e.to_string(), special_action },
        }
    }

    pub fn context(&self) -> &TerminalContext {
        &self.ctx
    }
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Terminal, JsValue> {
        Self::from_config(ShellConfig::default()).map_err(to_js_error)
    }

    /// construct from a json config blob, e.g. `{"email": "..."}`
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<Terminal, JsValue> {
        let config = ShellConfig::from_json(config_json).map_err(to_js_error)?;
        Self::from_config(config).map_err(to_js_error)
    }

    // main entry point - run a command and return result
    #[wasm_bindgen]
    pub fn execute_command(&mut self, input: &str) -> Result<JsValue, JsValue> {
        let response = self.run(input);
        for action in &response.special_action {
            perform(action);
        }
        serde_wasm_bindgen::to_value(&response).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn get_current_directory(&self) -> String {
        self.ctx.cwd.to_string()
    }

    #[wasm_bindgen]
    pub fn get_prompt(&self) -> String {
        self.ctx.prompt()
    }

    #[wasm_bindgen]
    pub fn get_command_list(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.registry.get_command_names()).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn get_history(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.ctx.history).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn get_theme(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.ctx.theme).map_err(JsValue::from)
    }

    // names under a path (cwd by default), for tab completion
    #[wasm_bindgen]
    pub fn list_files(&self, path: Option<String>) -> Result<JsValue, JsValue> {
        let target = self.ctx.cwd.resolve(path.as_deref().unwrap_or("."));
        let names = self
            .ctx
            .vfs
            .lookup(target.below_root())
            .map(vfs::VirtualFs::list)
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&names).map_err(JsValue::from)
    }
}

fn to_js_error(e: error::LoadError) -> JsValue {
    log::error!("{e}");
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
fn page_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_hostname() -> Option<String> {
    None
}

// only url opening is ours to do, clear/theme are left to the page
#[cfg(target_arch = "wasm32")]
fn perform(action: &SpecialAction) {
    if let SpecialAction::OpenUrl { url } = action {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if !matches!(opened, Some(Ok(_))) {
            log::warn!("could not open {url}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn perform(_action: &SpecialAction) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success_and_failure() {
        let mut term = Terminal::from_config(ShellConfig::default()).unwrap();
        let ok = term.run("cd events");
        assert!(ok.success);
        assert_eq!(term.context().cwd.to_string(), "~/events");

        let bad = term.run("cd nowhere");
        assert!(!bad.success);
        assert_eq!(bad.output, "cd: nowhere: No such file or directory");
        assert_eq!(term.context().cwd.to_string(), "~/events");
    }

    #[test]
    fn test_run_drains_actions() {
        let mut term = Terminal::from_config(ShellConfig::default()).unwrap();
        let resp = term.run("clear");
        assert_eq!(resp.special_action, vec![SpecialAction::ClearScreen]);
        assert!(term.run("pwd").special_action.is_empty());
    }

    #[test]
    fn test_bundled_events_browsable() {
        let mut term = Terminal::from_config(ShellConfig::default()).unwrap();
        assert_eq!(term.run("ls").output, "events");
        term.run("cd events");
        let listing = term.run("ls").output;
        let first = listing.lines().next().unwrap().to_string();
        let shown = term.run(&format!("cat {first}"));
        assert!(shown.success);
        assert!(shown.output.starts_with("ID: "));
    }

    #[test]
    fn test_repo_and_email_work_out_of_the_box() {
        let mut term = Terminal::from_config(ShellConfig::default()).unwrap();
        let repo = term.run("repo");
        assert!(repo.success, "{}", repo.output);
        assert_eq!(repo.output, "Opening repository...");
        assert_eq!(
            repo.special_action,
            vec![SpecialAction::OpenUrl { url: env!("CARGO_PKG_REPOSITORY").to_string() }]
        );

        let email = term.run("email");
        assert!(email.success, "{}", email.output);
        assert!(email.output.starts_with("Opening mailto:"));
        assert!(matches!(email.special_action.as_slice(), [SpecialAction::OpenUrl { url }] if url.starts_with("mailto:")));
    }

    #[test]
    fn test_response_json_shape() {
        let mut term = Terminal::from_config(ShellConfig::default()).unwrap();
        let json = serde_json::to_value(term.run("whoami")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "output": "guest" }));
    }
}
