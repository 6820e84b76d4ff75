use std::{
    borrow::Cow,
    panic::{self, AssertUnwindSafe},
};

use log::{debug, error, warn};

use crate::{
    command_error::{panic_message, CommandError},
    command_handler::{CommandHandler, FnHandler, NoopHandler},
    command_sender::{ChatColor, CommandSender},
    command_source::CommandSource,
    completion::CompletionNode,
    usage_builder::UsageBuilder,
};

/// Terminal state of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Executed,
    RejectedSource,
    RejectedPermission,
    RejectedArity,
    /// The handler failed and the sender was told why.
    FailedReported,
    /// The handler failed; only the log knows.
    FailedSilently,
}

/// A command node: its configuration, its sub commands and the handler run once
/// dispatch settles on it.
///
/// Nodes are configured through the chaining setters before being handed to a
/// [`CommandRegistry`](crate::CommandRegistry) and are never mutated by dispatch.
pub struct Command {
    name: String,
    sub_commands: Vec<Command>,
    aliases: Vec<String>,
    usage: Option<String>,
    description: String,
    permission: String,
    permitted_sources: [bool; 3],
    min_args: usize,
    max_args: usize,
    max_args_set: bool,
    completions: Option<CompletionNode>,
    handler: Box<dyn CommandHandler>,
}

impl Command {
    /// Creates a command accepting every source and no arguments.
    ///
    /// An empty `permission` means no permission is required.
    pub fn new(name: impl Into<String>, permission: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "command names cannot be empty");

        Self {
            name,
            sub_commands: Vec::new(),
            aliases: Vec::new(),
            usage: None,
            description: String::new(),
            permission: permission.into(),
            permitted_sources: [true; 3],
            min_args: 0,
            max_args: 0,
            max_args_set: false,
            completions: None,
            handler: Box::new(handler),
        }
    }

    pub fn from_fn<F>(name: impl Into<String>, permission: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&dyn CommandSender, &[&str]) -> Result<(), CommandError> + Sync + Send + 'static,
    {
        Self::new(name, permission, FnHandler(handler))
    }

    /// A command whose own handler does nothing, used to group sub commands.
    pub fn group(name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self::new(name, permission, NoopHandler)
    }

    /// Adds sub commands. A sub command sharing a name with an existing one replaces it.
    pub fn add_sub_commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        for command in commands {
            if let Some(existing) = self
                .sub_commands
                .iter_mut()
                .find(|c| c.name.eq_ignore_ascii_case(&command.name))
            {
                warn!("Sub command '{}' of '{}' declared twice, keeping the latest", command.name, self.name);
                *existing = command;
            } else {
                self.sub_commands.push(command);
            }
        }

        self
    }

    pub fn add_aliases<S: Into<String>>(mut self, aliases: impl IntoIterator<Item = S>) -> Self {
        for alias in aliases {
            let alias = alias.into();
            if !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }

        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Overrides the usage string derived from the command tree.
    pub fn set_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn set_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }

    pub fn add_permitted_sources(self, sources: impl IntoIterator<Item = CommandSource>) -> Self {
        self.set_permitted(sources, true)
    }

    pub fn remove_permitted_sources(self, sources: impl IntoIterator<Item = CommandSource>) -> Self {
        self.set_permitted(sources, false)
    }

    fn set_permitted(mut self, sources: impl IntoIterator<Item = CommandSource>, permitted: bool) -> Self {
        for source in sources {
            match source.slot() {
                Some(slot) => self.permitted_sources[slot] = permitted,
                None => warn!("Command '{}' cannot change admission for an unknown source", self.name),
            }
        }

        self
    }

    pub fn set_min_args(mut self, min_args: usize) -> Self {
        self.min_args = min_args;
        if self.max_args_set {
            self.warn_if_unsatisfiable();
        }
        self
    }

    /// Sets the maximum argument count. A maximum below the minimum is kept as is and
    /// rejects every invocation.
    pub fn set_max_args(mut self, max_args: usize) -> Self {
        self.max_args = max_args;
        self.max_args_set = true;
        self.warn_if_unsatisfiable();
        self
    }

    fn warn_if_unsatisfiable(&self) {
        if self.max_args < self.min_args {
            warn!(
                "Command '{}' has max args {} below min args {}, it can never run",
                self.name, self.max_args, self.min_args
            );
        }
    }

    pub fn set_completions(mut self, completions: CompletionNode) -> Self {
        self.completions = Some(completions);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sub_commands(&self) -> &[Command] {
        &self.sub_commands
    }

    /// Direct sub command whose name matches `name`, ignoring case. Aliases are not
    /// considered.
    pub fn sub_command(&self, name: &str) -> Option<&Command> {
        self.sub_commands.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn usage(&self) -> Cow<'_, str> {
        match &self.usage {
            Some(usage) => Cow::Borrowed(usage),
            None => Cow::Owned(UsageBuilder::new(self).build()),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }

    pub fn permitted_sources(&self) -> Vec<CommandSource> {
        CommandSource::ALL
            .into_iter()
            .filter(|source| self.is_permitted(*source))
            .collect()
    }

    pub fn is_permitted(&self, source: CommandSource) -> bool {
        source.slot().is_some_and(|slot| self.permitted_sources[slot])
    }

    pub fn is_player_permitted(&self) -> bool {
        self.is_permitted(CommandSource::Player)
    }

    pub fn is_console_permitted(&self) -> bool {
        self.is_permitted(CommandSource::Console)
    }

    pub fn is_command_block_permitted(&self) -> bool {
        self.is_permitted(CommandSource::CommandBlock)
    }

    pub fn min_args(&self) -> usize {
        self.min_args
    }

    pub fn max_args(&self) -> usize {
        self.max_args
    }

    pub fn completions(&self) -> Option<&CompletionNode> {
        self.completions.as_ref()
    }

    /// Routes an invocation to the deepest sub command named by the leading arguments
    /// and runs it there.
    ///
    /// Each leading argument naming a sub command is consumed. Once no sub command
    /// matches, the remaining arguments go through the admission checks of the node
    /// reached and, if admitted, to its handler. There is no backtracking.
    pub fn fire(&self, sender: &dyn CommandSender, args: &[&str]) -> Outcome {
        let Some((first, rest)) = args.split_first() else {
            return self.run_checks(sender, args);
        };

        match self.sub_command(first) {
            Some(sub_command) => sub_command.fire(sender, rest),
            None => self.run_checks(sender, args),
        }
    }

    fn run_checks(&self, sender: &dyn CommandSender, args: &[&str]) -> Outcome {
        let source = CommandSource::from_sender(sender);

        if !self.is_permitted(source) {
            debug!("{} ({:?}) is not a permitted source for '{}'", sender.name(), source, self.name);
            sender.send_message(&format!("{}This command cannot be executed by your account type", ChatColor::Red));
            return Outcome::RejectedSource;
        }

        if source == CommandSource::Player && !self.permission.is_empty() && !sender.has_permission(&self.permission) {
            debug!("{} lacks '{}' for '{}'", sender.name(), self.permission, self.name);
            sender.send_message(&format!(
                "{}You have insufficient permissions to execute this command!",
                ChatColor::Red
            ));
            return Outcome::RejectedPermission;
        }

        if args.len() > self.max_args || args.len() < self.min_args {
            debug!(
                "'{}' called with {} arguments, accepts {}..={}",
                self.name,
                args.len(),
                self.min_args,
                self.max_args
            );
            return Outcome::RejectedArity;
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.handler.call(sender, args))) {
            Ok(Ok(())) => Outcome::Executed,
            Ok(Err(e)) => self.report(sender, e),
            Err(payload) => {
                error!(
                    "Command '{}' panicked while executing for {}: {}",
                    self.name,
                    sender.name(),
                    panic_message(payload.as_ref())
                );
                Outcome::FailedSilently
            }
        }
    }

    fn report(&self, sender: &dyn CommandSender, err: CommandError) -> Outcome {
        error!("Command '{}' failed for {}: {:?}", self.name, sender.name(), err);

        match err {
            CommandError::IllegalArgument { argument, expected } => {
                sender.send_message(&format!(
                    "{}You have specified the wrong argument type for, {}, expected a {}!",
                    ChatColor::Red,
                    argument,
                    expected
                ));
                Outcome::FailedReported
            }
            CommandError::IllegalUsage => {
                sender.send_message(&format!(
                    "{}Incorrect command usage, the correct usage is:\n{}",
                    ChatColor::Red,
                    self.usage()
                ));
                Outcome::FailedReported
            }
            _ => Outcome::FailedSilently,
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("permission", &self.permission)
            .field("permitted_sources", &self.permitted_sources)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .field("sub_commands", &self.sub_commands)
            .finish_non_exhaustive()
    }
}
