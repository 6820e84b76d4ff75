#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashSet,
    sync::{Arc, Mutex},
};

use command_core::{ChatColor, Command, CommandError, CommandSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Player,
    Console,
    Block,
    Remote,
}

pub struct TestSender {
    kind: Kind,
    permissions: HashSet<String>,
    messages: RefCell<Vec<String>>,
}

impl TestSender {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            permissions: HashSet::new(),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn player(permissions: &[&str]) -> Self {
        let mut sender = Self::new(Kind::Player);
        sender.permissions = permissions.iter().map(|p| p.to_string()).collect();
        sender
    }

    /// Messages received so far, with formatting codes removed.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().iter().map(|m| ChatColor::strip(m)).collect()
    }
}

impl CommandSender for TestSender {
    fn name(&self) -> &str {
        "tester"
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn is_player(&self) -> bool {
        self.kind == Kind::Player
    }

    fn is_console(&self) -> bool {
        self.kind == Kind::Console
    }

    fn is_command_block(&self) -> bool {
        self.kind == Kind::Block
    }
}

/// Records the arguments of every call made to commands built with [`Calls::command`].
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<(String, Vec<String>)>>>);

impl Calls {
    pub fn command(&self, name: &str, permission: &str) -> Command {
        let calls = self.clone();
        let label = name.to_string();
        Command::from_fn(name, permission, move |_, args| {
            calls.0.lock().unwrap().push((label.clone(), args.iter().map(|a| a.to_string()).collect()));
            Ok(())
        })
    }

    pub fn failing(&self, name: &str, error: fn() -> CommandError) -> Command {
        let calls = self.clone();
        let label = name.to_string();
        Command::from_fn(name, "", move |_, args| {
            calls.0.lock().unwrap().push((label.clone(), args.iter().map(|a| a.to_string()).collect()));
            Err(error())
        })
    }

    pub fn taken(&self) -> Vec<(String, Vec<String>)> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}
