use crate::prelude::*;

/// Arguments supplied by the caller when constructing a builder,
/// by position and/or by name.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct Arguments {
    #[getset(get = "pub")]
    positional: Vec<Argument>,

    #[getset(get = "pub")]
    named: IndexMap<String, Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn push(mut self, value: impl Into<Argument>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named argument, replacing an earlier one with the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Argument>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Argument>, IndexMap<String, Argument>) {
        (self.positional, self.named)
    }
}
