use crate::command::Command;

/// Derives a usage line such as `/example <sub/other> <deeper>` from a command tree.
///
/// Each depth of the tree contributes one `<a/b/...>` block listing the names found at
/// that depth, in declaration order with repeats dropped.
pub struct UsageBuilder<'a> {
    command: &'a Command,
}

impl<'a> UsageBuilder<'a> {
    pub fn new(command: &'a Command) -> Self {
        Self { command }
    }

    pub fn build(&self) -> String {
        let mut usage = format!("/{} ", self.command.name());

        let mut level: Vec<&Command> = self.command.sub_commands().iter().collect();
        while !level.is_empty() {
            let mut names: Vec<&str> = Vec::with_capacity(level.len());
            for command in &level {
                if !names.contains(&command.name()) {
                    names.push(command.name());
                }
            }

            usage.push('<');
            usage.push_str(&names.join("/"));
            usage.push_str("> ");

            level = level.iter().flat_map(|c| c.sub_commands()).collect();
        }

        usage.pop();
        usage
    }
}
