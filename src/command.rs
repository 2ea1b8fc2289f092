use crate::commands;
use crate::context::TerminalContext;
use crate::error::ShellError;
use std::collections::HashMap;

pub type CommandResult = Result<String, ShellError>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult;

    /// Usage line for `help`, e.g. "cd [directory]".
    fn usage(&self) -> &'static str;

    /// One-line description for `help`.
    fn description(&self) -> &'static str;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
    order: Vec<String>, // registration order, which is help order
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new(), order: Vec::new() }
    }
    pub fn register_command(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        if self.commands.insert(name.to_string(), cmd).is_none() {
            self.order.push(name.to_string());
        }
    }
    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|c| &**c)
    }
    /// Names in registration order.
    pub fn get_command_names(&self) -> &[String] {
        &self.order
    }
    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command("help", Box::new(commands::help::HelpCommand));
        reg.register_command("hostname", Box::new(commands::hostname::HostnameCommand));
        reg.register_command("whoami", Box::new(commands::whoami::WhoamiCommand));
        reg.register_command("echo", Box::new(commands::echo::EchoCommand));
        reg.register_command("repo", Box::new(commands::repo::RepoCommand));
        reg.register_command("clear", Box::new(commands::clear::ClearCommand));
        reg.register_command("email", Box::new(commands::email::EmailCommand));
        reg.register_command("exit", Box::new(commands::exit::ExitCommand));
        reg.register_command("banner", Box::new(commands::banner::BannerCommand));
        reg.register_command("ls", Box::new(commands::ls::LsCommand));
        reg.register_command("cd", Box::new(commands::cd::CdCommand));
        reg.register_command("pwd", Box::new(commands::pwd::PwdCommand));
        reg.register_command("cat", Box::new(commands::cat::CatCommand));
        reg.register_command("history", Box::new(commands::history::HistoryCommand));
        reg.register_command("theme", Box::new(commands::theme::ThemeCommand));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Tokenize, dispatch, and log the call in history.
pub fn run_command(input: &str, ctx: &mut TerminalContext, registry: &CommandRegistry) -> CommandResult {
    let input = input.trim();

    let mut parts = input.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(String::new()), // empty input = no-op, not recorded
    };
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    let result = match registry.get(cmd) {
        Some(command) => {
            log::debug!("dispatch {cmd} {args:?}");
            command.execute(&args, ctx)
        }
        None => {
            log::warn!("unknown command: {cmd}");
            Err(ShellError::CommandNotFound(cmd.to_string()))
        }
    };

    // clear wipes history, recording it afterwards would undo that
    if cmd != "clear" {
        let shown = match &result {
            Ok(out) => out.clone(),
            Err(e) => e.to_string(),
        };
        ctx.record(input, &shown);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::test_context;

    #[test]
    fn test_registration_order() {
        let reg = CommandRegistry::default_commands();
        let names = reg.get_command_names();
        assert_eq!(names.first().map(String::as_str), Some("help"));
        assert_eq!(&names[9..13], ["ls", "cd", "pwd", "cat"]);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let mut reg = CommandRegistry::default_commands();
        let before = reg.get_command_names().to_vec();
        reg.register_command("ls", Box::new(commands::ls::LsCommand));
        assert_eq!(reg.get_command_names(), before.as_slice());
    }

    #[test]
    fn test_empty_input() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = test_context();
        assert_eq!(run_command("   ", &mut ctx, &reg), Ok(String::new()));
        assert!(ctx.history.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = test_context();
        let err = run_command("sudo rm -rf /", &mut ctx, &reg).unwrap_err();
        assert_eq!(err.to_string(), "sudo: command not found");
        assert_eq!(ctx.history.len(), 1);
        assert_eq!(ctx.history[0].output, "sudo: command not found");
    }

    #[test]
    fn test_whitespace_split() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = test_context();
        assert_eq!(run_command("  echo   a  b ", &mut ctx, &reg), Ok("a b".to_string()));
        assert_eq!(ctx.history[0].command, "echo   a  b");
    }

    #[test]
    fn test_clear_not_recorded() {
        let reg = CommandRegistry::default_commands();
        let mut ctx = test_context();
        run_command("whoami", &mut ctx, &reg).unwrap();
        run_command("pwd", &mut ctx, &reg).unwrap();
        assert_eq!(ctx.history.len(), 2);
        run_command("clear", &mut ctx, &reg).unwrap();
        assert!(ctx.history.is_empty());
    }
}
