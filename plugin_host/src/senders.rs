use std::collections::HashSet;

use colored::*;
use command_core::{ChatColor, CommandSender};

/// Renders legacy chat formatting codes as terminal colours.
pub fn render(message: &str) -> String {
    let mut segments = message.split(ChatColor::PREFIX);
    let mut out = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        let mut chars = segment.chars();
        let color = chars.next().and_then(ChatColor::from_code);
        let text = chars.as_str();

        let styled = match color {
            Some(ChatColor::Blue) => text.blue(),
            Some(ChatColor::Green) => text.green(),
            Some(ChatColor::Aqua) => text.cyan(),
            Some(ChatColor::Red) => text.red(),
            Some(ChatColor::Yellow) => text.yellow(),
            Some(ChatColor::Gray) => text.bright_black(),
            Some(ChatColor::White) => text.white(),
            Some(ChatColor::Reset) | None => text.normal(),
        };
        out.push_str(&styled.to_string());
    }

    out
}

pub struct Player {
    name: String,
    permissions: HashSet<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, permissions: HashSet<String>) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }
}

impl CommandSender for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        println!("{} {}", format!("[-> {}]", self.name).purple(), render(message));
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn is_player(&self) -> bool {
        true
    }
}

pub struct Console;

impl CommandSender for Console {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn send_message(&self, message: &str) {
        println!("{}", render(message));
    }

    fn has_permission(&self, _: &str) -> bool {
        true
    }

    fn is_console(&self) -> bool {
        true
    }
}

pub struct CommandBlock {
    location: String,
}

impl CommandBlock {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }
}

impl CommandSender for CommandBlock {
    fn name(&self) -> &str {
        &self.location
    }

    fn send_message(&self, message: &str) {
        println!("{} {}", format!("[@{}]", self.location).bright_black(), render(message));
    }

    fn has_permission(&self, _: &str) -> bool {
        true
    }

    fn is_command_block(&self) -> bool {
        true
    }
}

/// A sender kind the command layer does not know about, such as a remote RCON session.
pub struct Remote;

impl CommandSender for Remote {
    fn name(&self) -> &str {
        "remote"
    }

    fn send_message(&self, message: &str) {
        println!("{} {}", "[remote]".bright_black(), render(message));
    }

    fn has_permission(&self, _: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command_core::CommandSource;

    #[test]
    fn render_keeps_text_without_codes() {
        colored::control::set_override(false);
        assert_eq!(render("plain"), "plain");
        assert_eq!(render(&format!("{}Hello, {}Ari", ChatColor::Blue, ChatColor::Reset)), "Hello, Ari");
    }

    #[test]
    fn senders_classify() {
        let player = Player::new("Ari", HashSet::new());
        assert_eq!(CommandSource::from_sender(&player), CommandSource::Player);
        assert_eq!(CommandSource::from_sender(&Console), CommandSource::Console);
        assert_eq!(CommandSource::from_sender(&CommandBlock::new("0,64,0")), CommandSource::CommandBlock);
        assert_eq!(CommandSource::from_sender(&Remote), CommandSource::Unknown);
    }
}
