use crate::command_sender::CommandSender;

/// Kind of sender a command may be admitted from.
///
/// `Unknown` is what a sender that matches none of the known kinds classifies as. It has
/// no admission slot, so every command rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSource {
    Player,
    Console,
    CommandBlock,
    Unknown,
}

impl CommandSource {
    /// The admittable kinds, in slot order.
    pub const ALL: [CommandSource; 3] = [
        CommandSource::Player,
        CommandSource::Console,
        CommandSource::CommandBlock,
    ];

    /// Index into a command's permitted-sources table, `None` for [`CommandSource::Unknown`].
    pub const fn slot(self) -> Option<usize> {
        match self {
            CommandSource::Player => Some(0),
            CommandSource::Console => Some(1),
            CommandSource::CommandBlock => Some(2),
            CommandSource::Unknown => None,
        }
    }

    fn matches(self, sender: &dyn CommandSender) -> bool {
        match self {
            CommandSource::Player => sender.is_player(),
            CommandSource::Console => sender.is_console(),
            CommandSource::CommandBlock => sender.is_command_block(),
            CommandSource::Unknown => false,
        }
    }

    /// First kind in [`CommandSource::ALL`] order the sender matches.
    pub fn from_sender(sender: &dyn CommandSender) -> CommandSource {
        Self::ALL
            .into_iter()
            .find(|source| source.matches(sender))
            .unwrap_or(CommandSource::Unknown)
    }
}
