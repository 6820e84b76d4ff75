use std::{collections::HashMap, panic};

use linkme::distributed_slice;
use log::{error, info};

use crate::{
    command::Command,
    command_error::{panic_message, RegistryError},
    completion::{starts_with_ignore_case, CompletionNode},
    host_command::{CommandMap, HostCommand},
};

pub const DEFAULT_FALLBACK_PREFIX: &str = "CommandAPI";

/// A command constructor enrolled for package registration, usually by `#[command]`.
#[derive(Debug)]
pub struct CommandEntry {
    pub name: &'static str,
    pub module_path: &'static str,
    pub auto_register: bool,
    pub constructor: fn() -> Command,
}

impl CommandEntry {
    pub fn in_package(&self, package: &str) -> bool {
        self.module_path == package
            || self
                .module_path
                .strip_prefix(package)
                .is_some_and(|rest| rest.starts_with("::"))
    }

    pub fn construct(&self) -> Result<Command, RegistryError> {
        panic::catch_unwind(self.constructor).map_err(|payload| {
            RegistryError::Construction {
                entry: self.name,
                reason: panic_message(payload.as_ref()),
            }
        })
    }
}

#[distributed_slice]
pub static COMMAND_MANIFEST: [CommandEntry] = [..];

/// Receives the completion grammar of commands that provide one.
pub trait CompletionRegistrar {
    fn register(&mut self, command: &HostCommand, completions: &CompletionNode);
}

/// In-memory [`CompletionRegistrar`] answering suggestion queries for whole input lines.
#[derive(Debug, Default)]
pub struct CompletionTree {
    roots: Vec<CompletionNode>,
    labels: HashMap<String, usize>,
}

impl CompletionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggest(&self, line: &str) -> Vec<String> {
        let line = line.trim_start();
        let line = line.strip_prefix('/').unwrap_or(line);

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if line.is_empty() || line.ends_with(char::is_whitespace) {
            tokens.push("");
        }

        match tokens.split_first() {
            Some((partial, [])) => {
                let mut labels: Vec<String> = self
                    .labels
                    .keys()
                    .filter(|label| starts_with_ignore_case(label, partial))
                    .cloned()
                    .collect();
                labels.sort();
                labels
            }
            Some((label, rest)) => self
                .labels
                .get(&label.to_lowercase())
                .and_then(|&index| self.roots.get(index))
                .map(|root| root.suggest(rest))
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }
}

impl CompletionRegistrar for CompletionTree {
    fn register(&mut self, command: &HostCommand, completions: &CompletionNode) {
        let index = self.roots.len();
        self.roots.push(completions.clone());

        for label in std::iter::once(command.name()).chain(command.aliases().iter().map(String::as_str)) {
            self.labels.entry(label.to_lowercase()).or_insert(index);
        }
    }
}

/// Binds commands into a host [`CommandMap`] and, when present, their completion
/// grammar into a [`CompletionRegistrar`].
pub struct CommandRegistry<M, C = CompletionTree> {
    command_map: M,
    completions: Option<C>,
}

impl<M: CommandMap> CommandRegistry<M> {
    pub fn new(command_map: M) -> Self {
        Self {
            command_map,
            completions: None,
        }
    }
}

impl<M: CommandMap, C: CompletionRegistrar> CommandRegistry<M, C> {
    pub fn with_completions(command_map: M, completions: C) -> Self {
        Self {
            command_map,
            completions: Some(completions),
        }
    }

    pub fn command_map(&self) -> &M {
        &self.command_map
    }

    pub fn completions(&self) -> Option<&C> {
        self.completions.as_ref()
    }

    pub fn register_command(&mut self, command: Command) -> bool {
        self.register_command_for(DEFAULT_FALLBACK_PREFIX, command)
    }

    /// Registers `command` under `plugin`'s fallback prefix.
    pub fn register_command_for(&mut self, plugin: &str, command: Command) -> bool {
        let name = command.name().to_string();
        let host_command = command.into_host_command();

        if let (Some(registrar), Some(grammar)) = (self.completions.as_mut(), host_command.command().completions()) {
            registrar.register(&host_command, grammar);
        }

        let registered = self.command_map.register(plugin, host_command);
        if registered {
            info!("Registered the command, {}, successfully!", name);
        } else {
            info!("Registered the command, {}, as {}:{} (name already taken)", name, plugin, name);
        }
        registered
    }

    pub fn register_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.register_commands_for(DEFAULT_FALLBACK_PREFIX, commands)
    }

    pub fn register_commands_for(&mut self, plugin: &str, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.register_command_for(plugin, command);
        }
    }

    /// Registers every enrolled command declared in `package` (a module path) or below it,
    /// skipping those opted out of auto registration. Returns how many were registered.
    pub fn register_package(&mut self, plugin: &str, package: &str) -> usize {
        self.register_entries(plugin, package, &COMMAND_MANIFEST)
    }

    pub fn register_entries(&mut self, plugin: &str, package: &str, entries: &[CommandEntry]) -> usize {
        let mut count = 0;

        for entry in entries.iter().filter(|e| e.in_package(package) && e.auto_register) {
            info!("Attempting to register the command, {}..", entry.name);

            match entry.construct() {
                Ok(command) => {
                    self.register_command_for(plugin, command);
                    count += 1;
                }
                Err(e) => error!("Could not register the command, {}!! {:?}", entry.name, e),
            }
        }

        count
    }

    pub fn command_exists(&self, name: &str) -> bool {
        self.command_map.get_command(name).is_some()
    }

    pub fn command_exists_for(&self, command: &Command) -> bool {
        self.command_exists(command.name())
    }
}
