use crate::prelude::*;

const PACKAGE: ParamDescriptor = ParamDescriptor::keyword("package", ValueKind::ObjectId);
const MODULE_NAME: ParamDescriptor = ParamDescriptor::keyword("module_name", ValueKind::String);

/// Every normalized module of a package.
pub struct GetPackage;

impl RpcMethod for GetPackage {
    type Output = SuiMovePackage;
    const METHOD: &'static str = "sui_getNormalizedMoveModulesByPackage";
    const PARAMS: &'static [ParamDescriptor] = &[PACKAGE];

    fn handler() -> HandlerDescriptor<SuiMovePackage> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetPackage {
    pub fn new(package: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("package", package))
    }
}

pub struct GetModule;

impl RpcMethod for GetModule {
    type Output = SuiMoveModule;
    const METHOD: &'static str = "sui_getNormalizedMoveModule";
    const PARAMS: &'static [ParamDescriptor] = &[PACKAGE, MODULE_NAME];

    fn handler() -> HandlerDescriptor<SuiMoveModule> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetModule {
    pub fn new(package: impl Into<Argument>, module_name: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("package", package)
                .with("module_name", module_name),
        )
    }
}

pub struct GetFunction;

impl RpcMethod for GetFunction {
    type Output = SuiMoveFunction;
    const METHOD: &'static str = "sui_getNormalizedMoveFunction";
    const PARAMS: &'static [ParamDescriptor] = &[
        PACKAGE,
        MODULE_NAME,
        ParamDescriptor::keyword("function_name", ValueKind::String),
    ];

    fn handler() -> HandlerDescriptor<SuiMoveFunction> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetFunction {
    pub fn new(
        package: impl Into<Argument>,
        module_name: &str,
        function_name: &str,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("package", package)
                .with("module_name", module_name)
                .with("function_name", function_name),
        )
    }
}

/// Argument kinds of a Move function, pure or object and how objects are
/// passed.
pub struct GetFunctionArgs;

impl RpcMethod for GetFunctionArgs {
    type Output = SuiMoveFunctionArgumentTypes;
    const METHOD: &'static str = "sui_getMoveFunctionArgTypes";
    const PARAMS: &'static [ParamDescriptor] = &[
        PACKAGE,
        ParamDescriptor::keyword("module", ValueKind::String),
        ParamDescriptor::keyword("function", ValueKind::String),
    ];

    fn handler() -> HandlerDescriptor<SuiMoveFunctionArgumentTypes> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetFunctionArgs {
    pub fn new(
        package: impl Into<Argument>,
        module: &str,
        function: &str,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("package", package)
                .with("module", module)
                .with("function", function),
        )
    }
}

pub struct GetStructure;

impl RpcMethod for GetStructure {
    type Output = SuiMoveStruct;
    const METHOD: &'static str = "sui_getNormalizedMoveStruct";
    const PARAMS: &'static [ParamDescriptor] = &[
        PACKAGE,
        MODULE_NAME,
        ParamDescriptor::keyword("structure_name", ValueKind::String),
    ];

    fn handler() -> HandlerDescriptor<SuiMoveStruct> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetStructure {
    pub fn new(
        package: impl Into<Argument>,
        module_name: &str,
        structure_name: &str,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("package", package)
                .with("module_name", module_name)
                .with("structure_name", structure_name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parameters_in_declaration_order() {
        let sut = GetFunction::bind(
            Arguments::new()
                .with("function_name", "split")
                .with("package", "0x2")
                .with("module_name", "pay"),
        )
        .unwrap();
        assert_eq!(sut.parameters(), &json!(["0x2", "pay", "split"]));
    }

    #[test]
    fn function_args_decoder() {
        let sut = GetFunctionArgs::new("0x2", "pay", "split").unwrap();
        assert_eq!(sut.handler().entry_point(), EntryPoint::IngestData);
        let decoded = sut.decode(&json!(["Pure", {"Object": "ByValue"}])).unwrap();
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn unexpected_name() {
        let sut = GetStructure::bind(
            Arguments::new()
                .with("package", "0x2")
                .with("module", "coin")
                .with("structure_name", "Coin"),
        );
        assert_eq!(
            sut.unwrap_err(),
            Error::UnexpectedParameter {
                method: "sui_getNormalizedMoveStruct".to_owned(),
                parameter: "module".to_owned()
            }
        );
    }
}
