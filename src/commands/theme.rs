use crate::command::{Command, CommandResult};
use crate::context::{SpecialAction, TerminalContext};
use crate::error::ShellError;

pub struct ThemeCommand;

const THEME_USAGE: &str = "theme [ls | set <name>]";

impl Command for ThemeCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        match args {
            [sub] if sub == "ls" => Ok(ctx.themes.names().collect::<Vec<_>>().join("\n")),
            [sub, name] if sub == "set" => {
                let theme = ctx
                    .themes
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ShellError::UnknownTheme(name.clone()))?;
                log::info!("theme set to {}", theme.name);
                ctx.theme = Some(theme.clone());
                ctx.request(SpecialAction::SetTheme { theme });
                Ok(format!("Theme set to {}", name))
            }
            _ => Ok(format!("Usage: {}", THEME_USAGE)),
        }
    }

    fn usage(&self) -> &'static str {
        THEME_USAGE
    }

    fn description(&self) -> &'static str {
        "Lists the available color themes or switches to one of them."
    }
}
