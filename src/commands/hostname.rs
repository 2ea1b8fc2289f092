use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct HostnameCommand;

impl Command for HostnameCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.config.hostname().to_string())
    }

    fn usage(&self) -> &'static str {
        "hostname"
    }

    fn description(&self) -> &'static str {
        "Returns the current hostname."
    }
}
