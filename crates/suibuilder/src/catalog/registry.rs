use crate::prelude::*;

/// Type erased view of one catalog builder, for listing builders and
/// building calls by name.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    name: &'static str,
    method: &'static str,
    params: &'static [ParamDescriptor],
    convention: ParamConvention,
    entry_point: fn() -> EntryPoint,
    prepare: fn(Arguments) -> Result<RpcCall>,
    verify: fn(&Value) -> Result<()>,
}

impl CatalogEntry {
    const fn of<M: RpcMethod>(name: &'static str) -> Self {
        Self {
            name,
            method: M::METHOD,
            params: M::PARAMS,
            convention: M::CONVENTION,
            entry_point: entry_point::<M>,
            prepare: prepare::<M>,
            verify: verify::<M>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn params(&self) -> &'static [ParamDescriptor] {
        self.params
    }

    pub fn convention(&self) -> ParamConvention {
        self.convention
    }

    pub fn entry_point(&self) -> EntryPoint {
        (self.entry_point)()
    }

    /// Binds `arguments` and returns the call to send.
    pub fn prepare(&self, arguments: Arguments) -> Result<RpcCall> {
        (self.prepare)(arguments)
    }

    /// Checks that `raw` decodes into the builder's result type.
    pub fn verify(&self, raw: &Value) -> Result<()> {
        (self.verify)(raw)
    }
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("convention", &self.convention)
            .finish()
    }
}

fn entry_point<M: RpcMethod>() -> EntryPoint {
    M::handler().entry_point()
}

fn prepare<M: RpcMethod>(arguments: Arguments) -> Result<RpcCall> {
    M::bind(arguments).map(|builder| builder.to_call())
}

fn verify<M: RpcMethod>(raw: &Value) -> Result<()> {
    M::handler().decode(raw).map(|_| ())
}

static CATALOG: [CatalogEntry; 36] = [
    CatalogEntry::of::<GetCoinMetaData>("GetCoinMetaData"),
    CatalogEntry::of::<GetAllCoinBalances>("GetAllCoinBalances"),
    CatalogEntry::of::<GetAllCoins>("GetAllCoins"),
    CatalogEntry::of::<GetCoinTypeBalance>("GetCoinTypeBalance"),
    CatalogEntry::of::<GetCoins>("GetCoins"),
    CatalogEntry::of::<GetLatestSuiSystemState>("GetLatestSuiSystemState"),
    CatalogEntry::of::<GetTotalSupply>("GetTotalSupply"),
    CatalogEntry::of::<GetObjectsOwnedByAddress>("GetObjectsOwnedByAddress"),
    CatalogEntry::of::<GetDynamicFieldObject>("GetDynamicFieldObject"),
    CatalogEntry::of::<GetDynamicFields>("GetDynamicFields"),
    CatalogEntry::of::<GetObject>("GetObject"),
    CatalogEntry::of::<GetMultipleObjects>("GetMultipleObjects"),
    CatalogEntry::of::<GetPastObject>("GetPastObject"),
    CatalogEntry::of::<GetMultiplePastObjects>("GetMultiplePastObjects"),
    CatalogEntry::of::<GetPackage>("GetPackage"),
    CatalogEntry::of::<GetModule>("GetModule"),
    CatalogEntry::of::<GetFunction>("GetFunction"),
    CatalogEntry::of::<GetFunctionArgs>("GetFunctionArgs"),
    CatalogEntry::of::<GetStructure>("GetStructure"),
    CatalogEntry::of::<GetRpcAPI>("GetRpcAPI"),
    CatalogEntry::of::<GetCommittee>("GetCommittee"),
    CatalogEntry::of::<QueryEvents>("QueryEvents"),
    CatalogEntry::of::<GetEvents>("GetEvents"),
    CatalogEntry::of::<GetTotalTxCount>("GetTotalTxCount"),
    CatalogEntry::of::<GetTx>("GetTx"),
    CatalogEntry::of::<GetMultipleTx>("GetMultipleTx"),
    CatalogEntry::of::<GetTxs>("GetTxs"),
    CatalogEntry::of::<GetTransactionsInRange>("GetTransactionsInRange"),
    CatalogEntry::of::<GetDelegatedStakes>("GetDelegatedStakes"),
    CatalogEntry::of::<GetCheckpointContentsByDigest>("GetCheckpointContentsByDigest"),
    CatalogEntry::of::<GetCheckpointSummary>("GetCheckpointSummary"),
    CatalogEntry::of::<GetCheckpointSummaryByDigest>("GetCheckpointSummaryByDigest"),
    CatalogEntry::of::<GetLatestCheckpointSequence>("GetLatestCheckpointSequence"),
    CatalogEntry::of::<GetCheckpointByDigest>("GetCheckpointByDigest"),
    CatalogEntry::of::<GetCheckpointBySequence>("GetCheckpointBySequence"),
    CatalogEntry::of::<GetReferenceGasPrice>("GetReferenceGasPrice"),
];

/// Every builder, in catalog order.
pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// The builder named `name`, ignoring case.
pub fn find_builder(name: &str) -> Result<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownBuilder {
            name: name.to_owned(),
        })
}

/// Every builder targeting `method`, more than one for `sui_getCheckpoint`.
pub fn builders_for_method(method: &str) -> Vec<&'static CatalogEntry> {
    CATALOG.iter().filter(|entry| entry.method == method).collect()
}
