//! Built-in item commands: `enable`, `disable`, `enable-all`, `disable-all`
//!
//! `enable-all` and `disable-all` take no parameters and ignore anything
//! passed to them rather than reporting `too many args`.

use std::sync::Arc;

use crate::{
    args::{ArgKind, Param},
    descriptor::CommandDescriptor,
    registry::{Registry, RegistryError},
    store::ItemStore,
};

/// Number of commands added by [`register`].
pub const BUILTIN_COUNT: usize = 4;

pub fn enable(store: Arc<ItemStore>) -> CommandDescriptor {
    CommandDescriptor::new("enable", "enables an item with a value", move |args| {
        let item = args.str("item").unwrap_or_default();
        let value = args.int("value").unwrap_or_default();
        store.enable(item, value);
        format!("enabled {item} with value {value}")
    })
    .param(Param::required("item", ArgKind::String))
    .param(Param::required("value", ArgKind::Int))
}

pub fn disable(store: Arc<ItemStore>) -> CommandDescriptor {
    CommandDescriptor::new("disable", "disables an item", move |args| {
        let item = args.str("item").unwrap_or_default();
        store.disable(item);
        format!("disabled {item}")
    })
    .param(Param::required("item", ArgKind::String))
}

pub fn enable_all(store: Arc<ItemStore>) -> CommandDescriptor {
    CommandDescriptor::new("enable-all", "enables every item", move |_| {
        store.enable_all();
        "enabled all items".to_string()
    })
    .ignore_extra_args()
}

pub fn disable_all(store: Arc<ItemStore>) -> CommandDescriptor {
    CommandDescriptor::new("disable-all", "disables every item", move |_| {
        store.disable_all();
        "disabled all items".to_string()
    })
    .ignore_extra_args()
}

/// Add all four item commands to `registry`, sharing `store`.
///
/// # Errors
///
/// The first [`RegistryError`] hit; commands added before it stay registered.
pub fn register(registry: &mut Registry, store: &Arc<ItemStore>) -> Result<(), RegistryError> {
    registry.add(enable(Arc::clone(store)))?;
    registry.add(disable(Arc::clone(store)))?;
    registry.add(enable_all(Arc::clone(store)))?;
    registry.add(disable_all(Arc::clone(store)))
}

/// Registry with the item commands, and `help` when `with_help` is set.
///
/// # Errors
///
/// `RegistryError::Full` when `capacity` is too small for the commands.
pub fn standard_registry(
    capacity: usize,
    with_help: bool,
    store: &Arc<ItemStore>,
) -> Result<Registry, RegistryError> {
    let mut registry = if with_help {
        Registry::with_help(capacity)?
    } else {
        Registry::new(capacity)
    };
    register(&mut registry, store)?;
    Ok(registry)
}
