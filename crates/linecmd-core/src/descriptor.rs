//! Command descriptors: name, arity contract and effect

use std::{fmt, sync::Arc};

use itertools::Itertools;

use crate::args::{Arguments, Param};

/// Effect run once arguments validate. Returns the success message without
/// a line terminator.
pub type Handler = Arc<dyn Fn(&Arguments) -> String + Send + Sync>;

/// What happens to positional arguments beyond the declared parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraArgs {
    /// Report `too many args`
    #[default]
    Reject,
    /// Drop them without validation
    Ignore,
}

/// What a command does after validation.
#[derive(Clone)]
pub enum Action {
    /// List the registry, or show one command's usage
    Help,
    /// Run a user supplied effect
    Run(Handler),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("Help"),
            Self::Run(_) => f.write_str("Run(<handler>)"),
        }
    }
}

/// One accepted argument list of a command, with the effect it runs.
#[derive(Debug, Clone)]
pub struct Signature {
    params: Vec<Param>,
    extra_args: ExtraArgs,
    action: Action,
}

impl Signature {
    fn new(action: Action) -> Self {
        Self {
            params: Vec::new(),
            extra_args: ExtraArgs::Reject,
            action,
        }
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub const fn extra_args(&self) -> ExtraArgs {
        self.extra_args
    }

    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Number of arguments that must be present.
    pub fn min_args(&self) -> usize {
        self.params.iter().filter(|p| p.required).count()
    }

    /// Largest accepted argument count, `None` when extras are ignored.
    pub fn max_args(&self) -> Option<usize> {
        match self.extra_args {
            ExtraArgs::Reject => Some(self.params.len()),
            ExtraArgs::Ignore => None,
        }
    }

    /// Whether `count` arguments satisfy the arity alone, ignoring types.
    pub fn accepts_count(&self, count: usize) -> bool {
        count >= self.min_args() && self.max_args().map_or(true, |max| count <= max)
    }

    fn has_ordered_params(&self) -> bool {
        self.params
            .iter()
            .skip_while(|p| p.required)
            .all(|p| !p.required)
    }

    fn usage(&self, name: &str) -> String {
        let mut words = std::iter::once(name.to_string())
            .chain(self.params.iter().map(ToString::to_string));
        match self.extra_args {
            ExtraArgs::Reject => words.join(" "),
            ExtraArgs::Ignore => words.chain(std::iter::once("...".to_string())).join(" "),
        }
    }
}

/// Static description of one command.
///
/// A command has a primary signature and, optionally, overloads. Parameters
/// added with [`param`](Self::param) go to the signature declared last.
///
/// ```
/// use linecmd_core::{ArgKind, CommandDescriptor, Param};
///
/// let disable = CommandDescriptor::new("disable", "disable an item", |args| {
///     format!("disabled {}", args.str("item").unwrap_or_default())
/// })
/// .param(Param::required("item", ArgKind::String));
///
/// assert_eq!(disable.usage(), "disable <item:string>");
/// ```
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    name: &'static str,
    description: &'static str,
    primary: Signature,
    overloads: Vec<Signature>,
}

impl CommandDescriptor {
    pub fn new<F>(name: &'static str, description: &'static str, handler: F) -> Self
    where
        F: Fn(&Arguments) -> String + Send + Sync + 'static,
    {
        Self::with_action(name, description, Action::Run(Arc::new(handler)))
    }

    pub(crate) fn with_action(
        name: &'static str,
        description: &'static str,
        action: Action,
    ) -> Self {
        Self {
            name,
            description,
            primary: Signature::new(action),
            overloads: Vec::new(),
        }
    }

    /// Start an alternative signature with its own effect.
    ///
    /// Signatures are tried in declaration order; the first whose arity and
    /// types accept the arguments runs.
    pub fn overload<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Arguments) -> String + Send + Sync + 'static,
    {
        self.overloads
            .push(Signature::new(Action::Run(Arc::new(handler))));
        self
    }

    fn building(&mut self) -> &mut Signature {
        match self.overloads.last_mut() {
            Some(signature) => signature,
            None => &mut self.primary,
        }
    }

    /// Append a positional parameter to the signature declared last.
    pub fn param(mut self, param: Param) -> Self {
        self.building().params.push(param);
        self
    }

    /// Accept and drop arguments beyond the last signature's parameters.
    pub fn ignore_extra_args(mut self) -> Self {
        self.building().extra_args = ExtraArgs::Ignore;
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// All signatures, primary first.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        std::iter::once(&self.primary).chain(&self.overloads)
    }

    pub const fn primary(&self) -> &Signature {
        &self.primary
    }

    /// Fewest arguments any signature accepts.
    pub fn min_args(&self) -> usize {
        self.signatures()
            .map(Signature::min_args)
            .min()
            .unwrap_or_default()
    }

    /// Most arguments any signature accepts, `None` when one ignores extras.
    pub fn max_args(&self) -> Option<usize> {
        self.signatures()
            .map(Signature::max_args)
            .try_fold(0, |acc, max| max.map(|m| acc.max(m)))
    }

    /// Whether every signature lists required parameters before optional ones.
    pub(crate) fn has_ordered_params(&self) -> bool {
        self.signatures().all(Signature::has_ordered_params)
    }

    /// One usage line per signature, e.g. `enable <item:string> <value:int>`.
    pub fn usage(&self) -> String {
        self.signatures()
            .map(|signature| signature.usage(self.name))
            .join("\n")
    }
}
