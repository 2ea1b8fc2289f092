use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

/// pwd
/// Print the current path as `~/seg/seg`.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.cwd.to_string())
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Prints the current working directory."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::test_context;

    #[test]
    fn test_pwd() {
        let mut ctx = test_context();
        assert_eq!(PwdCommand.execute(&[], &mut ctx), Ok("~".to_string()));
        ctx.cwd = ctx.cwd.resolve("archive/2023");
        assert_eq!(PwdCommand.execute(&[], &mut ctx), Ok("~/archive/2023".to_string()));
    }
}
