use crate::command::{Command, CommandResult};
use crate::context::{SpecialAction, TerminalContext};
use crate::error::ShellError;

pub struct RepoCommand;

impl Command for RepoCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        if ctx.config.repository.is_empty() {
            return Err(ShellError::NotConfigured { cmd: "repo", what: "repository" });
        }
        let url = ctx.config.repository.clone();
        ctx.request(SpecialAction::OpenUrl { url });
        Ok("Opening repository...".to_string())
    }

    fn usage(&self) -> &'static str {
        "repo"
    }

    fn description(&self) -> &'static str {
        "Opens the repository URL in a new tab."
    }
}
