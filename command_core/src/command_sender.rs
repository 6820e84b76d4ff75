use std::fmt;

/// The entity that invoked a command, as seen by the dispatcher.
///
/// Hosts implement this for their players, console and command blocks. The `is_*` probes
/// are what [`CommandSource::from_sender`](crate::CommandSource::from_sender) classifies on;
/// a sender answering `false` to all three is treated as an unknown source.
pub trait CommandSender {
    fn name(&self) -> &str;

    fn send_message(&self, message: &str);

    fn has_permission(&self, permission: &str) -> bool;

    fn is_player(&self) -> bool {
        false
    }

    fn is_console(&self) -> bool {
        false
    }

    fn is_command_block(&self) -> bool {
        false
    }
}

/// Legacy chat formatting codes, written as `§` followed by the code character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatColor {
    Blue,
    Green,
    Aqua,
    Red,
    Yellow,
    Gray,
    White,
    Reset,
}

impl ChatColor {
    pub const PREFIX: char = '§';

    pub const fn code(self) -> char {
        match self {
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::Yellow => 'e',
            ChatColor::Gray => '7',
            ChatColor::White => 'f',
            ChatColor::Reset => 'r',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '9' => Some(ChatColor::Blue),
            'a' => Some(ChatColor::Green),
            'b' => Some(ChatColor::Aqua),
            'c' => Some(ChatColor::Red),
            'e' => Some(ChatColor::Yellow),
            '7' => Some(ChatColor::Gray),
            'f' => Some(ChatColor::White),
            'r' => Some(ChatColor::Reset),
            _ => None,
        }
    }

    /// Removes every formatting code from `message`.
    pub fn strip(message: &str) -> String {
        let mut out = String::with_capacity(message.len());
        let mut chars = message.chars();
        while let Some(c) = chars.next() {
            if c == Self::PREFIX {
                chars.next();
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.code())
    }
}
