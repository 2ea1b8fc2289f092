use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

/// Nothing to exit to in a browser tab.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok("Please close the tab to exit.".to_string())
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Instructs the user to close the tab to exit."
    }
}
