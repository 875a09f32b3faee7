use crate::prelude::*;

/// Every normalized module of a Move package, by module name.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct SuiMovePackage(IndexMap<String, SuiMoveModule>);

impl SuiMovePackage {
    pub fn module(&self, name: &str) -> Option<&SuiMoveModule> {
        self.0.get(name)
    }
}

impl IngestData for SuiMovePackage {
    fn ingest_data(json: &Value) -> Result<Self> {
        expect_object::<Self>(json)?
            .iter()
            .map(|(name, module)| Ok((name.clone(), SuiMoveModule::ingest_data(module)?)))
            .collect::<Result<IndexMap<_, _>>>()
            .map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiMoveModule {
    file_format_version: u32,
    address: String,
    name: String,
    #[serde(default)]
    friends: Vec<Value>,
    #[serde(default)]
    structs: IndexMap<String, SuiMoveStruct>,
    #[serde(default)]
    exposed_functions: IndexMap<String, SuiMoveFunction>,
}

impl IngestData for SuiMoveModule {
    fn ingest_data(json: &Value) -> Result<Self> {
        expect_object::<Self>(json)?;
        decode_value(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiMoveFunction {
    visibility: String,
    is_entry: bool,
    #[serde(default)]
    type_parameters: Vec<Value>,
    #[serde(default)]
    parameters: Vec<Value>,
    #[serde(rename = "return", default)]
    return_: Vec<Value>,
}

impl IngestData for SuiMoveFunction {
    fn ingest_data(json: &Value) -> Result<Self> {
        expect_object::<Self>(json)?;
        decode_value(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SuiMoveField {
    name: String,
    #[serde(rename = "type")]
    type_: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiMoveStruct {
    abilities: Value,
    #[serde(default)]
    type_parameters: Vec<Value>,
    fields: Vec<SuiMoveField>,
}

impl IngestData for SuiMoveStruct {
    fn ingest_data(json: &Value) -> Result<Self> {
        expect_object::<Self>(json)?;
        decode_value(json)
    }
}

/// How a function takes an object argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectValueKind {
    ByImmutableReference,
    ByMutableReference,
    ByValue,
}

/// Kind of one Move function argument, `"Pure"` or `{"Object": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IsVariant)]
pub enum SuiMoveFunctionArgType {
    Pure,
    Object(ObjectValueKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct SuiMoveFunctionArgumentTypes(Vec<SuiMoveFunctionArgType>);

impl IngestData for SuiMoveFunctionArgumentTypes {
    fn ingest_data(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, decode_value::<SuiMoveFunctionArgType>).map(Self)
    }
}
