use std::io::{self, BufRead, Write};

use chrono::Local;
use colored::*;
use command_core::{CommandRegistry, CommandSender, CompletionTree, Outcome, SimpleCommandMap};
use env_logger::Builder;
use log::{error, info, warn, Level};

mod commands;
mod config;
mod senders;

use config::{HostConfig, DEFAULT_CONFIG_PATH};
use senders::{CommandBlock, Console, Player, Remote};

type Registry = CommandRegistry<SimpleCommandMap, CompletionTree>;

fn init_logger(config: &HostConfig) {
    Builder::new()
        .filter(None, config.log_level)
        .parse_default_env()
        .format(|buf, record| {
            let timestamp = Local::now().format("%H:%M:%S");

            let log_line = format!("[{} | {}]: {}", timestamp, record.level(), record.args());

            let colored_line = match record.level() {
                Level::Error => log_line.red().bold(),
                Level::Warn => log_line.yellow().bold(),
                Level::Info => log_line.green(),
                Level::Debug => log_line.blue(),
                Level::Trace => log_line.normal(),
            };

            writeln!(buf, "{}", colored_line)
        })
        .init();
}

fn config_path() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return path;
            }
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

/// Resolves the sender named by `as <who>`.
fn sender_for(config: &HostConfig, who: &str) -> Box<dyn CommandSender> {
    match who {
        "console" => Box::new(Console),
        "block" => Box::new(CommandBlock::new("0,64,0")),
        "remote" => Box::new(Remote),
        name => {
            let permissions = config.player(name).map(|p| p.permissions.clone()).unwrap_or_default();
            Box::new(Player::new(name, permissions))
        }
    }
}

fn run_line(registry: &Registry, config: &HostConfig, sender: &dyn CommandSender, line: &str) {
    match registry.command_map().dispatch(sender, line) {
        Some(Outcome::Executed) | Some(Outcome::FailedReported) => {}
        Some(outcome) => info!("{} -> {:?}", line.trim(), outcome),
        None => {
            warn!("Unknown command '{}' (plugin {})", line.trim(), config.plugin);
            sender.send_message("Unknown command. Type \"list\" for the registered commands.");
        }
    }
}

fn handle(registry: &Registry, config: &HostConfig, input: &str) -> bool {
    let input = input.trim();
    let (head, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));

    match head {
        "" => {}
        "stop" | "exit" => return false,
        "list" => {
            let mut labels: Vec<&str> = registry.command_map().labels().collect();
            labels.sort_unstable();
            println!("{}", labels.join(", "));
        }
        "complete" => {
            let suggestions = registry.completions().map(|c| c.suggest(rest)).unwrap_or_default();
            println!("{}", suggestions.join(" | "));
        }
        "as" => {
            let (who, line) = rest.trim().split_once(char::is_whitespace).unwrap_or((rest.trim(), ""));
            let sender = sender_for(config, who);
            run_line(registry, config, sender.as_ref(), line);
        }
        _ => run_line(registry, config, &Console, input),
    }

    true
}

fn main() {
    let path = config_path();
    let config = match HostConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Could not load {}: {}", path, e).red());
            std::process::exit(1);
        }
    };

    init_logger(&config);

    let mut registry = CommandRegistry::with_completions(SimpleCommandMap::new(), CompletionTree::new());
    let count = commands::register(&mut registry, &config.plugin);
    info!("Enabled {} with {} commands", config.plugin, count);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            error!("flushing stdout: {}", e);
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                if !handle(&registry, &config, &input) {
                    break;
                }
            }
            Err(e) => {
                error!("reading input: {}", e);
                continue;
            }
        }
    }

    info!("Disabled {}", config.plugin);
}
