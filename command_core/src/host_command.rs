use std::{collections::HashMap, sync::Arc};

use crate::{
    command::{Command, Outcome},
    command_sender::CommandSender,
};

/// A top-level command as handed to the host's command table.
#[derive(Debug, Clone)]
pub struct HostCommand {
    name: String,
    description: String,
    usage: String,
    aliases: Vec<String>,
    command: Arc<Command>,
}

impl HostCommand {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Host callback for an invocation under `label`, with the input already tokenized.
    pub fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[&str]) -> Outcome {
        log::trace!("{} ran /{} {:?}", sender.name(), label, args);
        self.command.fire(sender, args)
    }
}

impl Command {
    pub fn into_host_command(self) -> HostCommand {
        HostCommand {
            name: self.name().to_string(),
            description: self.description().to_string(),
            usage: self.usage().into_owned(),
            aliases: self.aliases().to_vec(),
            command: Arc::new(self),
        }
    }
}

/// The host's command table.
pub trait CommandMap {
    /// Binds `command` under `fallback_prefix:name`, and under its bare name and aliases
    /// where those are still free. Returns `false` if the bare name was already taken.
    fn register(&mut self, fallback_prefix: &str, command: HostCommand) -> bool;

    fn get_command(&self, label: &str) -> Option<&HostCommand>;
}

/// In-memory [`CommandMap`] with case-insensitive labels.
#[derive(Debug, Default)]
pub struct SimpleCommandMap {
    commands: Vec<HostCommand>,
    labels: HashMap<String, usize>,
}

impl SimpleCommandMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> impl Iterator<Item = &HostCommand> {
        self.commands.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// Tokenizes a raw input line (leading `/` optional) and runs the command it names.
    ///
    /// Returns `None` when no command is bound to the label.
    pub fn dispatch(&self, sender: &dyn CommandSender, line: &str) -> Option<Outcome> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);

        let mut parts = line.split_whitespace();
        let label = parts.next()?;
        let args: Vec<&str> = parts.collect();

        let command = self.get_command(label)?;
        Some(command.execute(sender, label, &args))
    }

    fn bind(&mut self, label: &str, index: usize) -> bool {
        let label = label.to_lowercase();
        if self.labels.contains_key(&label) {
            return false;
        }
        self.labels.insert(label, index);
        true
    }
}

impl CommandMap for SimpleCommandMap {
    fn register(&mut self, fallback_prefix: &str, command: HostCommand) -> bool {
        let index = self.commands.len();
        let prefix = fallback_prefix.trim().to_lowercase();

        self.labels.insert(format!("{}:{}", prefix, command.name().to_lowercase()), index);
        let registered = self.bind(command.name(), index);
        for alias in command.aliases() {
            self.bind(alias, index);
        }

        self.commands.push(command);
        registered
    }

    fn get_command(&self, label: &str) -> Option<&HostCommand> {
        self.labels
            .get(&label.to_lowercase())
            .and_then(|&index| self.commands.get(index))
    }
}
