//! Commands shipped with the host. Everything declared with `#[command]` below this
//! module is picked up by [`register`].

mod brigadier;
mod example;
mod repeat;

use command_core::{CommandMap, CommandRegistry, CompletionRegistrar};

pub fn register<M: CommandMap, C: CompletionRegistrar>(registry: &mut CommandRegistry<M, C>, plugin: &str) -> usize {
    registry.register_package(plugin, module_path!())
}
