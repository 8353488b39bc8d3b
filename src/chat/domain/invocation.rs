//! Command line parser.

use super::CommandError;

/// A command line split into its command name and argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    command: String,
    arguments: String,
}

impl CommandInvocation {
    /// Parses `/<name>[<separator><arguments>]`.
    ///
    /// The name is the run of alphanumeric characters after the slash. The
    /// single character that ends it (typically `_` as in `/assign_3`, or a
    /// space as in `/new buy milk`) is dropped, and the rest of the line,
    /// trimmed, becomes the argument text. Arguments are not interpreted
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingLeadingSlash`] when the line is empty
    /// or does not start with `/`, and [`CommandError::EmptyCommand`] when
    /// no name follows the slash.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let rest = line
            .strip_prefix('/')
            .ok_or(CommandError::MissingLeadingSlash)?;

        let name_len = rest
            .char_indices()
            .find(|(_, character)| !character.is_alphanumeric())
            .map_or(rest.len(), |(index, _)| index);
        let (command, tail) = rest.split_at(name_len);
        if command.is_empty() {
            return Err(CommandError::EmptyCommand);
        }

        let mut tail_chars = tail.chars();
        tail_chars.next();
        let arguments = tail_chars.as_str().trim();

        Ok(Self {
            command: command.to_owned(),
            arguments: arguments.to_owned(),
        })
    }

    /// Returns the command name without the leading slash.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the trimmed argument text, empty when none was given.
    #[must_use]
    pub fn arguments(&self) -> &str {
        &self.arguments
    }
}
