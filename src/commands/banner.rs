use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;

pub struct BannerCommand;

const ART: &str = r"
  ██████╗ ██╗████████╗███████╗    ██╗     ██╗   ██╗ ██████╗
  ██╔══██╗██║╚══██╔══╝██╔════╝    ██║     ██║   ██║██╔════╝
  ██████╔╝██║   ██║   ███████╗    ██║     ██║   ██║██║  ███╗
  ██╔══██╗██║   ██║   ╚════██║    ██║     ██║   ██║██║   ██║
  ██████╔╝██║   ██║   ███████║    ███████╗╚██████╔╝╚██████╔╝
  ╚═════╝ ╚═╝   ╚═╝   ╚══════╝    ╚══════╝ ╚═════╝  ╚═════╝
";

impl Command for BannerCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(format!(
            "{ART}\n  v{}\n\nType 'help' to see list of available commands.\n",
            ctx.config.version
        ))
    }

    fn usage(&self) -> &'static str {
        "banner"
    }

    fn description(&self) -> &'static str {
        "Displays a banner with application information and version."
    }
}
