use command_core::{arg, ChatColor, CommandError, CommandSender};
use command_macro::command;

const MAX_REPEATS: u8 = 16;

#[command(
    name = "repeat",
    permission = "myplugin.repeat",
    description = "Echoes a word a number of times.",
    min = 2,
    max = 2
)]
pub fn repeat(sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError> {
    let count: u8 = arg(args, 0, "count")?;
    let word: &str = arg(args, 1, "word")?;

    if count == 0 || count > MAX_REPEATS {
        return Err(CommandError::IllegalUsage);
    }

    let line = vec![word; count as usize].join(" ");
    sender.send_message(&format!("{}{}", ChatColor::Aqua, line));
    Ok(())
}
