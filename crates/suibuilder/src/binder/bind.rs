use crate::prelude::*;

/// Binds caller `arguments` to the declared `descriptors` of `method`.
///
/// Every declared parameter ends up in the returned [`BoundFields`],
/// resolved as explicit argument, else declared default, else absent, and
/// coerced to its declared kind. Explicit nulls count as not supplied.
///
/// # Throws
/// * [`Error::TooManyArguments`] more positional arguments than parameters
///   accepting positional values.
/// * [`Error::UnexpectedParameter`] a named argument matching no parameter.
/// * [`Error::DuplicateArgument`] a parameter supplied by position and name.
/// * [`Error::MissingRequiredParameter`] a required parameter resolved to absent.
/// * [`Error::InvalidValueForKind`] a value which does not coerce.
pub fn bind_parameters(
    method: &str,
    descriptors: &'static [ParamDescriptor],
    arguments: Arguments,
) -> Result<BoundFields> {
    trace!(
        "Binding {} positional and {} named arguments for `{}`",
        arguments.positional().len(),
        arguments.named().len(),
        method
    );
    let (positional, named) = arguments.into_parts();

    let accepting_positional = descriptors
        .iter()
        .filter(|descriptor| descriptor.accepts_positional())
        .collect::<Vec<_>>();
    if positional.len() > accepting_positional.len() {
        return Err(Error::TooManyArguments {
            method: method.to_owned(),
            expected: accepting_positional.len(),
            received: positional.len(),
        });
    }

    let mut supplied = accepting_positional
        .iter()
        .map(|descriptor| descriptor.name())
        .zip(positional)
        .collect::<IndexMap<&str, Argument>>();

    for (name, argument) in named {
        let Some(descriptor) = descriptors.iter().find(|d| d.name() == name) else {
            return Err(Error::UnexpectedParameter {
                method: method.to_owned(),
                parameter: name,
            });
        };
        if supplied.contains_key(descriptor.name()) {
            return Err(Error::DuplicateArgument {
                method: method.to_owned(),
                parameter: name,
            });
        }
        supplied.insert(descriptor.name(), argument);
    }

    let mut fields = BoundFields::default();
    for descriptor in descriptors {
        let resolved = match supplied.swap_remove(descriptor.name()) {
            Some(argument) if !argument.is_absent() => Some(argument),
            _ => descriptor.default().to_argument(),
        };
        let Some(argument) = resolved else {
            return Err(Error::MissingRequiredParameter {
                method: method.to_owned(),
                parameter: descriptor.name().to_owned(),
            });
        };
        let value = if argument.is_absent() {
            CoercedValue::Null
        } else {
            coerce(descriptor.name(), descriptor.kind(), argument)?
        };
        fields.insert(descriptor.name(), value);
    }
    Ok(fields)
}
