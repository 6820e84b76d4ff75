use crate::{command_error::CommandError, command_sender::CommandSender};

/// The execute behaviour of a command node.
pub trait CommandHandler: Sync + Send {
    fn call(&self, sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError>;
}

/// Adapts a plain function or closure into a [`CommandHandler`].
pub struct FnHandler<F>(pub F);

impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&dyn CommandSender, &[&str]) -> Result<(), CommandError> + Sync + Send,
{
    fn call(&self, sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError> {
        (self.0)(sender, args)
    }
}

/// Handler for group nodes that only route to their sub commands.
pub struct NoopHandler;

impl CommandHandler for NoopHandler {
    fn call(&self, _: &dyn CommandSender, _: &[&str]) -> Result<(), CommandError> {
        Ok(())
    }
}
