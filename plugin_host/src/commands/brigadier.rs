use command_core::{arg, argument, literal, ArgumentType, ChatColor, CommandError, CommandSender, CompletionNode};
use command_macro::command;

#[command(
    name = "brigadier",
    permission = "myplugin.brigadier",
    description = "This is an example command which provides client-side completions.",
    aliases("brig"),
    deny(player, command_block),
    min = 1,
    max = 1,
    completions = "completions"
)]
pub fn brigadier(sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError> {
    let word: &str = arg(args, 0, "word")?;
    sender.send_message(&format!("{}Your word was: {}", ChatColor::Blue, word));
    Ok(())
}

fn completions() -> CompletionNode {
    literal("brigadier").then(argument("word", ArgumentType::Word))
}
