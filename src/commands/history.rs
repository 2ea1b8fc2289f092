use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        match args {
            [] => {
                let out = ctx
                    .history
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| format!("{:4}  {}", i + 1, entry.command))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(out)
            }
            [flag] if flag == "-c" => {
                ctx.history.clear();
                Ok("History cleared".to_string())
            }
            _ => Err(ShellError::Usage("history [-c]")),
        }
    }

    fn usage(&self) -> &'static str {
        "history [-c]"
    }

    fn description(&self) -> &'static str {
        "Lists previously run commands. Use 'history -c' to forget them."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{run_command, CommandRegistry};
    use crate::context::tests::test_context;

    #[test]
    fn test_history_lists_commands() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = test_context();
        run_command("cd events", &mut ctx, &reg).unwrap();
        run_command("ls", &mut ctx, &reg).unwrap();
        // the history call itself is recorded only after it runs
        let out = run_command("history", &mut ctx, &reg).unwrap();
        assert_eq!(out, "   1  cd events\n   2  ls");
        assert_eq!(ctx.history.len(), 3);
    }

    #[test]
    fn test_history_clear() {
        let mut ctx = test_context();
        ctx.record("ls", "events");
        assert_eq!(HistoryCommand.execute(&["-c".to_string()], &mut ctx), Ok("History cleared".to_string()));
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn test_history_bad_flag() {
        let mut ctx = test_context();
        let err = HistoryCommand.execute(&["-x".to_string()], &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "Usage: history [-c]");
    }
}
