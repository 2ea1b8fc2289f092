// native front end: same terminal, driven from stdin
use lugterm::config::ShellConfig;
use lugterm::context::SpecialAction;
use lugterm::error::LoadError;
use lugterm::Terminal;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn load_config() -> Result<ShellConfig, LoadError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            ShellConfig::from_json(&std::fs::read_to_string(path)?)
        }
        None => Ok(ShellConfig::default()),
    }
}

fn repl(term: &mut Terminal) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", term.run("banner").output);
    loop {
        print!("{} ", term.context().prompt());
        stdout.flush()?;
        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let response = term.run(&input);
        for action in &response.special_action {
            match action {
                SpecialAction::ClearScreen => print!("\x1b[2J\x1b[H"),
                SpecialAction::OpenUrl { url } => println!("(open {url} in a browser)"),
                SpecialAction::SetTheme { .. } => {}
            }
        }
        if !response.output.is_empty() {
            println!("{}", response.output);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut term = match load_config().and_then(Terminal::from_config) {
        Ok(t) => t,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = repl(&mut term) {
        log::error!("stdin: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
