//! Command registry - registration at startup, read-only lookup afterwards

use std::collections::BTreeMap;

use thiserror::Error;

use crate::descriptor::CommandDescriptor;

/// Why a command could not be registered. The registry is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command '{name}' is already registered")]
    Duplicate { name: String },

    #[error("cannot register '{name}': registry is full ({capacity} commands)")]
    Full { name: String, capacity: usize },

    #[error("command '{name}' declares a required parameter after an optional one")]
    OptionalBeforeRequired { name: String },
}

/// Name to descriptor mapping with a fixed capacity.
///
/// Lookup is exact and case-sensitive. Iteration is in name order.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: BTreeMap<&'static str, CommandDescriptor>,
    capacity: usize,
}

impl Registry {
    /// Create an empty registry holding at most `capacity` commands.
    pub const fn new(capacity: usize) -> Self {
        Self {
            commands: BTreeMap::new(),
            capacity,
        }
    }

    /// Create a registry that already contains the `help` command.
    pub fn with_help(capacity: usize) -> Result<Self, RegistryError> {
        let mut registry = Self::new(capacity);
        registry.add(crate::help::command())?;
        Ok(registry)
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// - `Full` when `capacity` commands are already registered
    /// - `Duplicate` when the name is taken
    /// - `OptionalBeforeRequired` when the parameter list is out of order
    pub fn add(&mut self, command: CommandDescriptor) -> Result<(), RegistryError> {
        let name = command.name();

        if self.commands.len() >= self.capacity {
            return Err(RegistryError::Full {
                name: name.to_string(),
                capacity: self.capacity,
            });
        }
        if self.commands.contains_key(name) {
            return Err(RegistryError::Duplicate {
                name: name.to_string(),
            });
        }
        if !command.has_ordered_params() {
            return Err(RegistryError::OptionalBeforeRequired {
                name: name.to_string(),
            });
        }

        tracing::trace!(command = name, "registered command");
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All commands, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
