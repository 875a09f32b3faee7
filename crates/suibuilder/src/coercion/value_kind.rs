use crate::prelude::*;

/// The declared kind of a builder parameter, selects the coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValueKind {
    #[display("Integer")]
    Integer,
    #[display("String")]
    String,
    #[display("Boolean")]
    Boolean,
    #[display("Address")]
    Address,
    #[display("ObjectId")]
    ObjectId,
    #[display("EventId")]
    EventId,
    /// Homogeneous list, every element coerced to the inner kind.
    #[display("Array<{_0}>")]
    Array(&'static ValueKind),
    /// String keyed map, values coerced by inference.
    #[display("Map")]
    Map,
}
