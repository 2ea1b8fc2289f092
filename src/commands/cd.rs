use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let target = match args {
            [] => "~",
            [dir] => dir.as_str(),
            _ => return Err(ShellError::TooManyArguments("cd")),
        };

        // work out the whole move first so a bad segment leaves cwd alone
        let new_path = ctx.cwd.resolve(target);
        match ctx.vfs.lookup(new_path.below_root()) {
            Some(entry) if entry.is_dir() => {
                ctx.cwd = new_path;
                Ok(String::new())
            }
            Some(_) => {
                log::warn!("cd into file rejected: {target}");
                Err(ShellError::not_a_directory("cd", target))
            }
            None => {
                log::warn!("cd into missing path rejected: {target}");
                Err(ShellError::not_found("cd", target))
            }
        }
    }

    fn usage(&self) -> &'static str {
        "cd [directory]"
    }

    fn description(&self) -> &'static str {
        "Changes the current directory. Use 'cd ..' to go up one level, or 'cd ~' to return to home."
    }
}
