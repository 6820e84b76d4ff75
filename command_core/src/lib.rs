pub mod command;
pub mod command_error;
pub mod command_handler;
pub mod command_sender;
pub mod command_source;
pub mod completion;
pub mod host_command;
pub mod parse_argument;
pub mod registry;
pub mod usage_builder;

pub use command::{Command, Outcome};
pub use command_error::{CommandError, RegistryError};
pub use command_handler::{CommandHandler, FnHandler, NoopHandler};
pub use command_sender::{ChatColor, CommandSender};
pub use command_source::CommandSource;
pub use completion::{argument, literal, ArgumentType, CompletionNode};
pub use host_command::{CommandMap, HostCommand, SimpleCommandMap};
pub use parse_argument::{arg, optional_arg, ParseArgument};
pub use registry::{CommandEntry, CommandRegistry, CompletionRegistrar, CompletionTree, COMMAND_MANIFEST, DEFAULT_FALLBACK_PREFIX};
pub use usage_builder::UsageBuilder;
