use crate::prelude::*;

/// Flags controlling which parts of an object `sui_getObject` and friends
/// return. Key names are sent verbatim to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder, CopyGetters)]
#[builder(default)]
pub struct ObjectReadOptions {
    #[getset(get_copy = "pub")]
    show_type: bool,
    #[getset(get_copy = "pub")]
    show_owner: bool,
    #[getset(get_copy = "pub")]
    show_previous_transaction: bool,
    #[getset(get_copy = "pub")]
    show_display: bool,
    #[getset(get_copy = "pub")]
    show_content: bool,
    #[getset(get_copy = "pub")]
    show_bcs: bool,
    #[getset(get_copy = "pub")]
    show_storage_rebate: bool,
}

impl ObjectReadOptions {
    /// Everything, the default for object reads.
    pub const OBJECT: Self = Self {
        show_type: true,
        show_owner: true,
        show_previous_transaction: true,
        show_display: true,
        show_content: true,
        show_bcs: true,
        show_storage_rebate: true,
    };

    /// What correctly fetches a package object: no display, no content.
    pub const PACKAGE: Self = Self {
        show_display: false,
        show_content: false,
        ..Self::OBJECT
    };

    pub fn flags(&self) -> [(&'static str, bool); 7] {
        [
            ("showType", self.show_type),
            ("showOwner", self.show_owner),
            ("showPreviousTransaction", self.show_previous_transaction),
            ("showDisplay", self.show_display),
            ("showContent", self.show_content),
            ("showBcs", self.show_bcs),
            ("showStorageRebate", self.show_storage_rebate),
        ]
    }

    pub fn to_coerced(&self) -> CoercedValue {
        flags_to_map(&self.flags())
    }
}

impl Default for ObjectReadOptions {
    fn default() -> Self {
        Self::OBJECT
    }
}

/// Flags controlling which parts of a transaction `sui_getTransaction`
/// and `sui_multiGetTransactions` return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder, CopyGetters)]
#[builder(default)]
pub struct TransactionReadOptions {
    #[getset(get_copy = "pub")]
    show_effects: bool,
    #[getset(get_copy = "pub")]
    show_events: bool,
    #[getset(get_copy = "pub")]
    show_input: bool,
}

impl TransactionReadOptions {
    pub const DEFAULT: Self = Self {
        show_effects: true,
        show_events: true,
        show_input: false,
    };

    pub fn flags(&self) -> [(&'static str, bool); 3] {
        [
            ("showEffects", self.show_effects),
            ("showEvents", self.show_events),
            ("showInput", self.show_input),
        ]
    }

    pub fn to_coerced(&self) -> CoercedValue {
        flags_to_map(&self.flags())
    }
}

impl Default for TransactionReadOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn flags_to_map(flags: &[(&'static str, bool)]) -> CoercedValue {
    CoercedValue::map(
        flags
            .iter()
            .map(|(key, on)| (*key, CoercedValue::Boolean(*on))),
    )
}

impl From<ObjectReadOptions> for Argument {
    fn from(value: ObjectReadOptions) -> Self {
        Self::Typed(value.to_coerced())
    }
}

impl From<TransactionReadOptions> for Argument {
    fn from(value: TransactionReadOptions) -> Self {
        Self::Typed(value.to_coerced())
    }
}

/// The read only registry of default option maps shared by several
/// builders, keyed by method family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum OptionsFamily {
    /// `sui_getObject`, `sui_multiGetObjects`, `sui_tryGetPastObject`,
    /// `sui_tryMultiGetPastObjects`.
    ObjectRead,
    /// Object reads of package objects.
    PackageRead,
    /// `sui_getTransaction`, `sui_multiGetTransactions`.
    TransactionRead,
}

impl OptionsFamily {
    /// A fresh copy of the default options map, callers own the result.
    pub fn defaults(self) -> CoercedValue {
        match self {
            Self::ObjectRead => ObjectReadOptions::OBJECT.to_coerced(),
            Self::PackageRead => ObjectReadOptions::PACKAGE.to_coerced(),
            Self::TransactionRead => TransactionReadOptions::DEFAULT.to_coerced(),
        }
    }
}
