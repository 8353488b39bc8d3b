//! The closed set of chat commands.

use super::CommandError;
use std::fmt;

/// A supported slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/tasks`: list every unresolved task.
    Tasks,
    /// `/new <content>`: create a task.
    New,
    /// `/assign_<id>`: claim a task.
    Assign,
    /// `/unassign_<id>`: release a claimed task.
    Unassign,
    /// `/resolve_<id>`: resolve a claimed task.
    Resolve,
    /// `/my`: list tasks assigned to the sender.
    My,
    /// `/owner`: list tasks created by the sender.
    Owner,
}

impl Command {
    /// Every command, in the order shown by the usage text.
    pub const ALL: [Self; 7] = [
        Self::Tasks,
        Self::New,
        Self::Assign,
        Self::Unassign,
        Self::Resolve,
        Self::My,
        Self::Owner,
    ];

    /// Returns the command name without the leading slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::New => "new",
            Self::Assign => "assign",
            Self::Unassign => "unassign",
            Self::Resolve => "resolve",
            Self::My => "my",
            Self::Owner => "owner",
        }
    }

    /// Returns the one-line usage entry for the command.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Tasks => "/tasks - list all open tasks",
            Self::New => "/new XXX YYY ZZZ - create a new task",
            Self::Assign => "/assign_$ID - make yourself the assignee of a task",
            Self::Unassign => "/unassign_$ID - release a task assigned to you",
            Self::Resolve => "/resolve_$ID - resolve a task assigned to you",
            Self::My => "/my - list tasks assigned to you",
            Self::Owner => "/owner - list tasks created by you",
        }
    }

    /// Builds the usage text listing every command.
    #[must_use]
    pub fn usage_text() -> String {
        let mut text = String::from("Usage:");
        for command in Self::ALL {
            text.push_str("\n\t");
            text.push_str(command.usage());
        }
        text
    }
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_owned()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}
