use crate::prelude::*;

/// How a caller may supply a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ParamStyle {
    /// By position or by name.
    PositionalOrKeyword,
    /// By name only.
    KeywordOnly,
}

/// What a parameter resolves to when the caller does not supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ParamDefault {
    /// Construction fails if not supplied.
    Required,
    /// Left out of the request.
    Absent,
    /// Literal string, e.g. a coin type.
    String(&'static str),
}

impl ParamDefault {
    /// The default as an argument, `None` for [`ParamDefault::Required`].
    pub fn to_argument(self) -> Option<Argument> {
        match self {
            Self::Required => None,
            Self::Absent => Some(Argument::absent()),
            Self::String(s) => Some(s.into()),
        }
    }
}

/// Declaration of one builder parameter. Builders declare a static table
/// of these, in the order the RPC method expects its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct ParamDescriptor {
    #[getset(get_copy = "pub")]
    name: &'static str,

    #[getset(get_copy = "pub")]
    kind: ValueKind,

    #[getset(get_copy = "pub")]
    style: ParamStyle,

    #[getset(get_copy = "pub")]
    default: ParamDefault,
}

impl ParamDescriptor {
    /// Required, keyword only parameter.
    pub const fn keyword(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            style: ParamStyle::KeywordOnly,
            default: ParamDefault::Required,
        }
    }

    /// Required parameter which may also be supplied by position.
    pub const fn positional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            style: ParamStyle::PositionalOrKeyword,
            default: ParamDefault::Required,
        }
    }

    /// Makes the parameter optional, absent when not supplied.
    pub const fn optional(self) -> Self {
        Self {
            default: ParamDefault::Absent,
            ..self
        }
    }

    pub const fn default_str(self, value: &'static str) -> Self {
        Self {
            default: ParamDefault::String(value),
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_required()
    }

    pub fn accepts_positional(&self) -> bool {
        self.style.is_positional_or_keyword()
    }
}
