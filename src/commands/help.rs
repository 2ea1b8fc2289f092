use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use std::fmt::Write as _;

/// help [COMMAND]
/// Numbered listing of every command, or the entry for one of them.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        // help lives outside the registry it describes, so it borrows a handle to it
        let Some(registry) = ctx.get_command_registry() else {
            return Err(ShellError::NoRegistry("help"));
        };

        if let Some(name) = args.first() {
            let cmd = registry
                .get(name)
                .ok_or_else(|| ShellError::NoHelpTopic(name.clone()))?;
            return Ok(format!("{}\n  - Usage: {}\n  - Description: {}", name, cmd.usage(), cmd.description()));
        }

        let mut out = String::from("Available commands:\n");
        for (i, name) in registry.get_command_names().iter().enumerate() {
            let Some(cmd) = registry.get(name) else { continue };
            let num = format!("{}. ", i + 1);
            let pad = " ".repeat(num.len() + 2);
            let _ = writeln!(out, "  {num}{}", cmd.usage());
            let _ = writeln!(out, "{pad}- Usage: {}", cmd.usage());
            let _ = writeln!(out, "{pad}- Description: {}", cmd.description());
        }
        out.push_str("Type a command and press Enter to execute it.");
        Ok(out)
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Displays this help message with a list of available commands."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::context::tests::test_context;
    use crate::theme::ThemeCatalog;
    use crate::vfs::tests::fixture;

    #[test]
    fn test_help_lists_in_order() {
        let mut ctx = test_context();
        let out = HelpCommand.execute(&[], &mut ctx).unwrap();
        assert!(out.starts_with("Available commands:\n  1. help\n     - Usage: help\n"));
        let ls = out.find("10. ls").unwrap();
        let cd = out.find("11. cd [directory]").unwrap();
        assert!(ls < cd);
        assert!(out.contains("      - Description: Lists the contents of the current directory."));
        assert!(out.ends_with("Type a command and press Enter to execute it."));
    }

    #[test]
    fn test_help_single_command() {
        let mut ctx = test_context();
        let out = HelpCommand.execute(&["pwd".to_string()], &mut ctx).unwrap();
        assert_eq!(out, "pwd\n  - Usage: pwd\n  - Description: Prints the current working directory.");
    }

    #[test]
    fn test_help_without_registry() {
        let themes = ThemeCatalog::bundled().unwrap();
        let mut ctx = TerminalContext::with_parts(fixture(), themes, ShellConfig::default());
        let err = HelpCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err, ShellError::NoRegistry("help"));
        assert_eq!(err.to_string(), "help: unable to access command registry");
    }

    #[test]
    fn test_help_unknown_topic() {
        let mut ctx = test_context();
        let err = HelpCommand.execute(&["sudo".to_string()], &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "help: no help topics match 'sudo'");
    }
}
