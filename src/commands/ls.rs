use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::VirtualFs;

pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let entry = match args.first() {
            None => ctx.cwd_entry().ok_or(ShellError::NoSuchDirectory)?,
            Some(path) => {
                let target = ctx.cwd.resolve(path);
                ctx.vfs
                    .lookup(target.below_root())
                    .ok_or_else(|| ShellError::not_found("ls", path))?
            }
        };

        // one name per line, events in data order, dirs alphabetical
        Ok(VirtualFs::list(entry).join("\n"))
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "Lists the contents of the current directory."
    }
}
