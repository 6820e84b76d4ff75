//! Client-side completion grammar for a command.
//!
//! This is a side channel: the dispatcher never consults it. Hosts that support
//! suggestions receive it through a [`CompletionRegistrar`](crate::CompletionRegistrar).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    /// A single token without whitespace.
    Word,
    /// A single non-empty token.
    String,
    /// Everything until the end of the line.
    GreedyString,
    Integer,
    Bool,
}

impl ArgumentType {
    pub fn accepts(self, token: &str) -> bool {
        match self {
            ArgumentType::Word => !token.is_empty() && !token.contains(char::is_whitespace),
            ArgumentType::String => !token.is_empty(),
            ArgumentType::GreedyString => true,
            ArgumentType::Integer => token.parse::<i64>().is_ok(),
            ArgumentType::Bool => token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Literal,
    Argument(ArgumentType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionNode {
    name: String,
    kind: NodeKind,
    children: Vec<CompletionNode>,
}

pub fn literal(name: impl Into<String>) -> CompletionNode {
    CompletionNode {
        name: name.into(),
        kind: NodeKind::Literal,
        children: Vec::new(),
    }
}

pub fn argument(name: impl Into<String>, argument_type: ArgumentType) -> CompletionNode {
    CompletionNode {
        name: name.into(),
        kind: NodeKind::Argument(argument_type),
        children: Vec::new(),
    }
}

impl CompletionNode {
    pub fn then(mut self, child: CompletionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[CompletionNode] {
        &self.children
    }

    pub fn accepts(&self, token: &str) -> bool {
        match self.kind {
            NodeKind::Literal => self.name.eq_ignore_ascii_case(token),
            NodeKind::Argument(argument_type) => argument_type.accepts(token),
        }
    }

    /// Suggestions for the token being typed after `self`.
    ///
    /// `tokens` are the words following this node's own literal; the last one is the
    /// partial word under the cursor and may be empty.
    pub fn suggest(&self, tokens: &[&str]) -> Vec<String> {
        let Some((partial, complete)) = tokens.split_last() else {
            return Vec::new();
        };

        let mut node = self;
        for token in complete {
            if let NodeKind::Argument(ArgumentType::GreedyString) = node.kind {
                return Vec::new();
            }
            match node.children.iter().find(|child| child.accepts(token)) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        node.children
            .iter()
            .filter_map(|child| match child.kind {
                NodeKind::Literal => starts_with_ignore_case(&child.name, partial).then(|| child.name.clone()),
                NodeKind::Argument(_) => Some(format!("<{}>", child.name)),
            })
            .collect()
    }
}

pub(crate) fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.len() >= prefix.len()
        && candidate
            .chars()
            .zip(prefix.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}
