use crate::prelude::*;

const OBJECT_IDS: ValueKind = ValueKind::Array(&ValueKind::ObjectId);
const PAST_OBJECTS: ValueKind = ValueKind::Array(&ValueKind::Map);

const OPTIONS: ParamDescriptor = ParamDescriptor::keyword("options", ValueKind::Map).optional();
const POSITIONAL_OPTIONS: ParamDescriptor =
    ParamDescriptor::positional("options", ValueKind::Map).optional();

fn with_object_read_defaults(fields: BoundFields) -> BoundFields {
    fields.or_default("options", || OptionsFamily::ObjectRead.defaults())
}

/// Objects owned by an address.
pub struct GetObjectsOwnedByAddress;

impl RpcMethod for GetObjectsOwnedByAddress {
    type Output = ObjectInfoList;
    const METHOD: &'static str = "sui_getObjectsOwnedByAddress";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("address", ValueKind::Address)];

    fn handler() -> HandlerDescriptor<ObjectInfoList> {
        HandlerDescriptor::factory()
    }
}

impl GetObjectsOwnedByAddress {
    pub fn new(address: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(address))
    }
}

/// A dynamic field object of a parent, by field name.
pub struct GetDynamicFieldObject;

impl RpcMethod for GetDynamicFieldObject {
    type Output = ObjectRead;
    const METHOD: &'static str = "sui_getDynamicFieldObject";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::positional("parent_object_id", ValueKind::ObjectId),
        ParamDescriptor::positional("name", ValueKind::Map),
    ];

    fn handler() -> HandlerDescriptor<ObjectRead> {
        HandlerDescriptor::factory()
    }
}

impl GetDynamicFieldObject {
    /// `name` is the typed field name, e.g. `{"type": "u64", "value": "1"}`.
    pub fn new(
        parent_object_id: impl Into<Argument>,
        name: impl Into<Argument>,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(parent_object_id).push(name))
    }
}

/// A page of the dynamic fields of a parent object.
pub struct GetDynamicFields;

impl RpcMethod for GetDynamicFields {
    type Output = DynamicFields;
    const METHOD: &'static str = "sui_getDynamicFields";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::positional("parent_object_id", ValueKind::ObjectId),
        ParamDescriptor::positional("cursor", ValueKind::ObjectId).optional(),
        ParamDescriptor::positional("limit", ValueKind::Integer).optional(),
    ];

    fn handler() -> HandlerDescriptor<DynamicFields> {
        HandlerDescriptor::from_dict()
    }
}

impl GetDynamicFields {
    pub fn new(parent_object_id: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(parent_object_id))
    }
}

/// One object by id. Unless the caller sends its own `options`, every
/// part of the object is requested.
pub struct GetObject;

impl RpcMethod for GetObject {
    type Output = ObjectRead;
    const METHOD: &'static str = "sui_getObject";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::keyword("object_id", ValueKind::ObjectId),
        OPTIONS,
    ];

    fn handler() -> HandlerDescriptor<ObjectRead> {
        HandlerDescriptor::factory()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_object_read_defaults(fields)
    }
}

impl GetObject {
    pub fn new(object_id: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("object_id", object_id))
    }

    pub fn with_options(
        object_id: impl Into<Argument>,
        options: ObjectReadOptions,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("object_id", object_id)
                .with("options", options),
        )
    }

    /// Options used when the caller sends none.
    pub fn object_options() -> CoercedValue {
        OptionsFamily::ObjectRead.defaults()
    }

    /// Options for reading a package object.
    pub fn package_options() -> CoercedValue {
        OptionsFamily::PackageRead.defaults()
    }
}

pub struct GetMultipleObjects;

impl RpcMethod for GetMultipleObjects {
    type Output = ObjectReadArray;
    const METHOD: &'static str = "sui_multiGetObjects";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::keyword("object_ids", OBJECT_IDS),
        OPTIONS,
    ];

    fn handler() -> HandlerDescriptor<ObjectReadArray> {
        HandlerDescriptor::factory()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_object_read_defaults(fields)
    }
}

impl GetMultipleObjects {
    pub fn new<T: Into<Argument>>(object_ids: Vec<T>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("object_ids", object_ids))
    }

    pub fn object_options() -> CoercedValue {
        OptionsFamily::ObjectRead.defaults()
    }

    pub fn package_options() -> CoercedValue {
        OptionsFamily::PackageRead.defaults()
    }
}

/// An object at a past version, if the node still has it.
pub struct GetPastObject;

impl RpcMethod for GetPastObject {
    type Output = ObjectRead;
    const METHOD: &'static str = "sui_tryGetPastObject";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::positional("object_id", ValueKind::ObjectId),
        ParamDescriptor::positional("version", ValueKind::Integer),
        POSITIONAL_OPTIONS,
    ];

    fn handler() -> HandlerDescriptor<ObjectRead> {
        HandlerDescriptor::factory()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_object_read_defaults(fields)
    }
}

impl GetPastObject {
    pub fn new(object_id: impl Into<Argument>, version: u64) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(object_id).push(version))
    }
}

/// Several objects, each at a past version.
pub struct GetMultiplePastObjects;

impl RpcMethod for GetMultiplePastObjects {
    type Output = ObjectReadArray;
    const METHOD: &'static str = "sui_tryMultiGetPastObjects";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::positional("past_objects", PAST_OBJECTS),
        POSITIONAL_OPTIONS,
    ];

    fn handler() -> HandlerDescriptor<ObjectReadArray> {
        HandlerDescriptor::factory()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_object_read_defaults(fields)
    }
}

impl GetMultiplePastObjects {
    /// `(object id, version)` pairs.
    pub fn new(past_objects: &[(&str, u64)]) -> Result<SuiBuilder<Self>> {
        let requests = past_objects
            .iter()
            .map(|(object_id, version)| Self::past_object(object_id, *version))
            .collect::<Result<Vec<_>>>()?;
        Self::bind(Arguments::new().push(requests))
    }

    /// One entry of `past_objects`, the version sent as a decimal string.
    pub fn past_object(object_id: &str, version: u64) -> Result<CoercedValue> {
        Ok(CoercedValue::map([
            ("objectId", object_id.parse::<ObjectId>()?.into()),
            ("version", version.to_string().into()),
        ]))
    }
}
