use crate::prelude::*;

pub struct GetLatestSuiSystemState;

impl RpcMethod for GetLatestSuiSystemState {
    type Output = SuiLatestSystemState;
    const METHOD: &'static str = "sui_getLatestSuiSystemState";
    const PARAMS: &'static [ParamDescriptor] = &[];

    fn handler() -> HandlerDescriptor<SuiLatestSystemState> {
        HandlerDescriptor::from_dict()
    }
}

impl GetLatestSuiSystemState {
    pub fn new() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}

/// The OpenRPC document describing the node's API, undecoded.
pub struct GetRpcAPI;

impl RpcMethod for GetRpcAPI {
    type Output = Value;
    const METHOD: &'static str = "rpc.discover";
    const PARAMS: &'static [ParamDescriptor] = &[];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetRpcAPI {
    pub fn new() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}

/// Validator committee of an epoch, the current one if `epoch` is absent.
pub struct GetCommittee;

impl RpcMethod for GetCommittee {
    type Output = CommitteeInfo;
    const METHOD: &'static str = "sui_getCommitteeInfo";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("epoch", ValueKind::Integer).optional()];

    fn handler() -> HandlerDescriptor<CommitteeInfo> {
        HandlerDescriptor::factory()
    }
}

impl GetCommittee {
    pub fn new(epoch: Option<u64>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("epoch", epoch))
    }
}

pub struct GetDelegatedStakes;

impl RpcMethod for GetDelegatedStakes {
    type Output = DelegatedStakes;
    const METHOD: &'static str = "sui_getDelegatedStakes";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("owner", ValueKind::Address)];

    fn handler() -> HandlerDescriptor<DelegatedStakes> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetDelegatedStakes {
    pub fn new(owner: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(owner))
    }
}

/// Reference gas price of the current epoch, undecoded.
pub struct GetReferenceGasPrice;

impl RpcMethod for GetReferenceGasPrice {
    type Output = Value;
    const METHOD: &'static str = "sui_getReferenceGasPrice";
    const PARAMS: &'static [ParamDescriptor] = &[];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetReferenceGasPrice {
    pub fn new() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}
