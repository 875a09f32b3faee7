use crate::prelude::*;

/// Type name of the native coin.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

const COIN_TYPE: ParamDescriptor =
    ParamDescriptor::keyword("coin_type", ValueKind::String).default_str(SUI_COIN_TYPE);
const OWNER: ParamDescriptor = ParamDescriptor::keyword("owner", ValueKind::Address);
const CURSOR: ParamDescriptor = ParamDescriptor::keyword("cursor", ValueKind::ObjectId).optional();
const LIMIT: ParamDescriptor = ParamDescriptor::keyword("limit", ValueKind::Integer).optional();

/// Metadata of a coin type, `sui_getCoinMetadata`.
pub struct GetCoinMetaData;

impl RpcMethod for GetCoinMetaData {
    type Output = SuiCoinMetadata;
    const METHOD: &'static str = "sui_getCoinMetadata";
    const PARAMS: &'static [ParamDescriptor] = &[COIN_TYPE];

    fn handler() -> HandlerDescriptor<SuiCoinMetadata> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCoinMetaData {
    pub fn new(coin_type: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("coin_type", coin_type))
    }

    /// Metadata of SUI.
    pub fn sui() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}

/// Balances of every coin type an address owns.
pub struct GetAllCoinBalances;

impl RpcMethod for GetAllCoinBalances {
    type Output = CoinBalances;
    const METHOD: &'static str = "sui_getAllBalances";
    const PARAMS: &'static [ParamDescriptor] = &[OWNER];

    fn handler() -> HandlerDescriptor<CoinBalances> {
        HandlerDescriptor::ingest_data()
    }
}

impl GetAllCoinBalances {
    pub fn new(owner: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("owner", owner))
    }
}

/// A page of all coin objects an address owns, of any type.
pub struct GetAllCoins;

impl RpcMethod for GetAllCoins {
    type Output = SuiCoinObjects;
    const METHOD: &'static str = "sui_getAllCoins";
    const PARAMS: &'static [ParamDescriptor] = &[OWNER, CURSOR, LIMIT];

    fn handler() -> HandlerDescriptor<SuiCoinObjects> {
        HandlerDescriptor::from_dict()
    }
}

impl GetAllCoins {
    pub fn new(owner: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("owner", owner))
    }

    /// The page after `cursor`, at most `limit` coins.
    pub fn page(
        owner: impl Into<Argument>,
        cursor: Option<ObjectId>,
        limit: Option<u64>,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("owner", owner)
                .with("cursor", cursor)
                .with("limit", limit),
        )
    }
}

pub struct GetCoinTypeBalance;

impl RpcMethod for GetCoinTypeBalance {
    type Output = SuiCoinBalance;
    const METHOD: &'static str = "sui_getBalance";
    const PARAMS: &'static [ParamDescriptor] = &[OWNER, COIN_TYPE];

    fn handler() -> HandlerDescriptor<SuiCoinBalance> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCoinTypeBalance {
    /// SUI balance of `owner`.
    pub fn new(owner: impl Into<Argument>) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("owner", owner))
    }

    pub fn of_type(
        owner: impl Into<Argument>,
        coin_type: &str,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("owner", owner)
                .with("coin_type", coin_type),
        )
    }
}

/// A page of coin objects of one type an address owns.
pub struct GetCoins;

impl RpcMethod for GetCoins {
    type Output = SuiCoinObjects;
    const METHOD: &'static str = "sui_getCoins";
    const PARAMS: &'static [ParamDescriptor] = &[OWNER, COIN_TYPE, CURSOR, LIMIT];

    fn handler() -> HandlerDescriptor<SuiCoinObjects> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCoins {
    pub fn new(owner: impl Into<Argument>, coin_type: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("owner", owner)
                .with("coin_type", coin_type),
        )
    }
}

/// Total supply of a coin type, returned undecoded.
pub struct GetTotalSupply;

impl RpcMethod for GetTotalSupply {
    type Output = Value;
    const METHOD: &'static str = "sui_getTotalSupply";
    const PARAMS: &'static [ParamDescriptor] = &[COIN_TYPE];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetTotalSupply {
    pub fn new(coin_type: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("coin_type", coin_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn coin_type_defaults_to_sui() {
        assert_eq!(GetCoinMetaData::sui().unwrap().parameters(), &json!(["0x2::sui::SUI"]));
        assert_eq!(
            GetTotalSupply::bind(Arguments::new()).unwrap().parameters(),
            &json!(["0x2::sui::SUI"])
        );
        assert_eq!(
            GetCoinTypeBalance::new("0x7").unwrap().parameters(),
            &json!(["0x7", "0x2::sui::SUI"])
        );
    }

    #[test]
    fn balance_requires_owner() {
        assert_eq!(
            GetCoinTypeBalance::bind(Arguments::new()).unwrap_err(),
            Error::MissingRequiredParameter {
                method: "sui_getBalance".to_owned(),
                parameter: "owner".to_owned()
            }
        );
    }

    #[test]
    fn keyword_only() {
        let sut = GetAllCoinBalances::bind(Arguments::new().push("0x7"));
        assert!(sut.unwrap_err().is_too_many_arguments());
    }

    #[test]
    fn page_skips_trailing_absent() {
        assert_eq!(
            GetAllCoins::page("0x7", None, None).unwrap().parameters(),
            &json!(["0x7"])
        );
        assert_eq!(
            GetAllCoins::page("0x7", None, Some(10)).unwrap().parameters(),
            &json!(["0x7", null, 10])
        );
    }

    #[test]
    fn malformed_owner() {
        let sut = GetCoins::new("7c", "0x2::sui::SUI");
        assert!(sut.unwrap_err().is_validation_error());
    }
}
