use crate::prelude::*;

/// The Sui system object at the latest epoch. Fields not listed here are
/// kept verbatim in [`Self::other`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct SuiLatestSystemState {
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    epoch: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    protocol_version: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    system_state_version: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    reference_gas_price: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    epoch_start_timestamp_ms: u64,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    epoch_duration_ms: Option<u64>,
    #[serde(default)]
    active_validators: Vec<Value>,
    #[serde(flatten)]
    other: IndexMap<String, Value>,
}

impl FromDict for SuiLatestSystemState {}

/// Voting power of one validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct CommitteeMember {
    #[getset(get = "pub")]
    authority_name: String,
    #[getset(get_copy = "pub")]
    stake: u64,
}

/// The validator committee of an epoch.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct CommitteeInfo {
    #[getset(get_copy = "pub")]
    epoch: u64,
    #[getset(get = "pub")]
    validators: Vec<CommitteeMember>,
}

impl CommitteeInfo {
    pub fn total_stake(&self) -> u64 {
        self.validators.iter().map(CommitteeMember::stake).sum()
    }
}

impl Factory for CommitteeInfo {
    /// Members arrive as `[name, stake]` pairs, under `validators` on current
    /// nodes and `committee_info` on older ones.
    fn factory(json: &Value) -> Result<Self> {
        let members = expect_object::<Self>(json)?;
        let epoch = members
            .get("epoch")
            .and_then(u64_from_json)
            .ok_or_else(|| Error::decode_failed::<Self>("missing or invalid `epoch`"))?;
        let pairs = members
            .get("validators")
            .or_else(|| members.get("committee_info"))
            .ok_or_else(|| Error::decode_failed::<Self>("missing `validators`"))?;
        let validators = decode_each::<Self, _>(pairs, committee_member)?;
        Ok(Self { epoch, validators })
    }
}

fn committee_member(pair: &Value) -> Result<CommitteeMember> {
    match pair.as_array().map(Vec::as_slice) {
        Some([name, stake]) => {
            let authority_name = name.as_str().map(str::to_owned);
            let stake = u64_from_json(stake);
            authority_name
                .zip(stake)
                .map(|(authority_name, stake)| CommitteeMember {
                    authority_name,
                    stake,
                })
                .ok_or_else(|| Error::decode_failed::<CommitteeMember>(pair))
        }
        _ => Err(Error::decode_failed::<CommitteeMember>(format!(
            "expected a `[name, stake]` pair, found `{}`",
            pair
        ))),
    }
}

fn u64_from_json(json: &Value) -> Option<u64> {
    json.as_u64()
        .or_else(|| json.as_str().and_then(|s| s.parse().ok()))
}

/// One stake of a delegator in a validator's staking pool.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct Stake {
    staked_sui_id: ObjectId,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    stake_request_epoch: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    stake_active_epoch: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    principal: u64,
    status: String,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    estimated_reward: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct DelegatedStake {
    validator_address: SuiAddress,
    staking_pool: ObjectId,
    stakes: Vec<Stake>,
}

/// Every stake an owner has delegated, grouped by validator.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct DelegatedStakes(Vec<DelegatedStake>);

impl DelegatedStakes {
    pub fn total_principal(&self) -> u64 {
        self.0
            .iter()
            .flat_map(|delegated| delegated.stakes.iter())
            .map(|stake| stake.principal)
            .sum()
    }
}

impl IngestData for DelegatedStakes {
    fn ingest_data(json: &Value) -> Result<Self> {
        decode_each::<Self, _>(json, decode_value::<DelegatedStake>).map(Self)
    }
}
