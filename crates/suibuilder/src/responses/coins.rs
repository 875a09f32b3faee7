use crate::prelude::*;

/// Metadata of a coin type, e.g. `0x2::sui::SUI`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiCoinMetadata {
    decimals: u8,
    name: String,
    symbol: String,
    description: String,
    #[serde(default)]
    icon_url: Option<String>,
    #[serde(default)]
    id: Option<ObjectId>,
}

impl FromDict for SuiCoinMetadata {}

/// Total balance an owner holds of one coin type.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiCoinBalance {
    coin_type: String,
    coin_object_count: u64,
    #[serde_as(as = "DisplayFromStr")]
    total_balance: u128,
    #[serde(default)]
    locked_balance: IndexMap<String, Value>,
}

impl FromDict for SuiCoinBalance {}

/// Balances of every coin type an owner holds.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct CoinBalances(Vec<SuiCoinBalance>);

impl CoinBalances {
    /// Balance of `coin_type`, if the owner holds any.
    pub fn of(&self, coin_type: &str) -> Option<&SuiCoinBalance> {
        self.0.iter().find(|b| b.coin_type == coin_type)
    }
}

impl IngestData for CoinBalances {
    fn ingest_data(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, SuiCoinBalance::from_dict).map(Self)
    }
}

/// One coin object.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiCoin {
    coin_type: String,
    coin_object_id: ObjectId,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    version: u64,
    digest: String,
    #[serde_as(as = "DisplayFromStr")]
    balance: u128,
    previous_transaction: String,
}

/// A page of coin objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiCoinObjects {
    data: Vec<SuiCoin>,
    #[serde(default)]
    next_cursor: Option<ObjectId>,
    #[serde(default)]
    has_next_page: bool,
}

impl FromDict for SuiCoinObjects {}
