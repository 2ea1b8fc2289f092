use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

/// echo [STRING]...
/// Arguments joined by single spaces, no trailing newline.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(args.join(" "))
    }

    fn usage(&self) -> &'static str {
        "echo [args]"
    }

    fn description(&self) -> &'static str {
        "Echoes back the provided arguments as a string."
    }
}
