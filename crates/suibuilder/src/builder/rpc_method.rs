use crate::prelude::*;

/// A trait for the static declaration of one Sui JSON-RPC method.
///
/// Declares the method name, the parameter table, how parameters are laid
/// out on the wire and how the result is decoded.
pub trait RpcMethod: Sized {
    /// The decoded result type.
    type Output;

    /// The RPC method name, e.g. `sui_getObject`.
    const METHOD: &'static str;

    /// Parameters in the order the method expects them.
    const PARAMS: &'static [ParamDescriptor];

    const CONVENTION: ParamConvention = ParamConvention::Positional;

    fn handler() -> HandlerDescriptor<Self::Output>;

    /// Second construction phase, runs once on the bound fields before the
    /// payload is laid out. Must not fail and must not validate again.
    fn finalize(fields: BoundFields) -> BoundFields {
        fields
    }

    /// Binds `arguments` into a ready to send builder.
    fn bind(arguments: Arguments) -> Result<SuiBuilder<Self>> {
        SuiBuilder::bind(arguments)
    }
}
