use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.config.user.clone())
    }

    fn usage(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Returns the current user identity (default is 'guest')."
    }
}
