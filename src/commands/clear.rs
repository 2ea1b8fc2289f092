use crate::command::{Command, CommandResult};
use crate::context::{SpecialAction, TerminalContext};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        ctx.history.clear();
        // the page wipes its scrollback when it sees this
        ctx.request(SpecialAction::ClearScreen);
        Ok(String::new())
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clears the command history."
    }
}
