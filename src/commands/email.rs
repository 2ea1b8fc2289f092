use crate::command::{Command, CommandResult};
use crate::context::{SpecialAction, TerminalContext};
use crate::error::ShellError;

pub struct EmailCommand;

impl Command for EmailCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        if ctx.config.email.is_empty() {
            return Err(ShellError::NotConfigured { cmd: "email", what: "contact address" });
        }
        let url = format!("mailto:{}", ctx.config.email);
        let out = format!("Opening {}...", url);
        ctx.request(SpecialAction::OpenUrl { url });
        Ok(out)
    }

    fn usage(&self) -> &'static str {
        "email"
    }

    fn description(&self) -> &'static str {
        "Opens the default email client to send an email to the author."
    }
}
