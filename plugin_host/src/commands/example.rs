use command_core::{ChatColor, CommandError, CommandSender};
use command_macro::command;

#[command(
    name = "example",
    permission = "myplugin.example",
    description = "This is an example command built using the command API.",
    aliases("exam", "ple"),
    deny(command_block),
    subcommands(sub)
)]
pub fn example(_: &dyn CommandSender, _: &[&str]) -> Result<(), CommandError> {
    Ok(())
}

// Registered through `example`, not on its own.
#[command(
    name = "sub",
    permission = "myplugin.example.sub",
    description = "An example sub command.",
    usage = "/example sub <yourName>",
    min = 0,
    max = 1,
    no_auto_register
)]
pub fn sub(sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError> {
    match args {
        [] => sender.send_message(&format!("{}Try adding your name at the end.", ChatColor::Red)),
        [name, ..] => sender.send_message(&format!("{}Hello, {}", ChatColor::Blue, name)),
    }

    Ok(())
}
