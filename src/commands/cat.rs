use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::error::ShellError;
use crate::vfs::Entry;

pub struct CatCommand;

impl CatCommand {
    fn read_one(name: &str, ctx: &TerminalContext) -> CommandResult {
        // titles may contain '/', so a bare file name beats path splitting
        if let Some(Entry::Events(events)) = ctx.cwd_entry() {
            if let Some(event) = events.iter().find(|e| e.file_name() == name) {
                return Ok(event.render());
            }
        }

        let target = ctx.cwd.resolve(name);
        match ctx.vfs.lookup(target.below_root()) {
            Some(Entry::File(event)) => Ok(event.render()),
            // directories have no contents to print
            _ => Err(ShellError::not_found("cat", name)),
        }
    }
}

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        match args {
            [] => Err(ShellError::Usage("cat <filename>")),
            [file] => Self::read_one(file, ctx),
            files => {
                // several files: keep going past misses like real cat
                let ctx: &TerminalContext = ctx;
                let blocks: Vec<String> = files
                    .iter()
                    .map(|f| Self::read_one(f, ctx).unwrap_or_else(|e| e.to_string()))
                    .collect();
                Ok(blocks.join("\n\n"))
            }
        }
    }

    fn usage(&self) -> &'static str {
        "cat [filename]"
    }

    fn description(&self) -> &'static str {
        "Displays the contents of a file."
    }
}
