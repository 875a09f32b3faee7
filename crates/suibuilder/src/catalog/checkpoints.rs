use crate::prelude::*;

pub struct GetCheckpointContentsByDigest;

impl RpcMethod for GetCheckpointContentsByDigest {
    type Output = CheckpointContents;
    const METHOD: &'static str = "sui_getCheckpointContentsByDigest";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("digest", ValueKind::String)];

    fn handler() -> HandlerDescriptor<CheckpointContents> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCheckpointContentsByDigest {
    pub fn new(digest: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(digest))
    }
}

pub struct GetCheckpointSummary;

impl RpcMethod for GetCheckpointSummary {
    type Output = CheckpointSummary;
    const METHOD: &'static str = "sui_getCheckpointSummary";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("sequence_number", ValueKind::Integer)];

    fn handler() -> HandlerDescriptor<CheckpointSummary> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCheckpointSummary {
    pub fn new(sequence_number: u64) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(sequence_number))
    }
}

pub struct GetCheckpointSummaryByDigest;

impl RpcMethod for GetCheckpointSummaryByDigest {
    type Output = CheckpointSummary;
    const METHOD: &'static str = "sui_getCheckpointSummaryByDigest";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("digest", ValueKind::String)];

    fn handler() -> HandlerDescriptor<CheckpointSummary> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCheckpointSummaryByDigest {
    pub fn new(digest: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(digest))
    }
}

/// Sequence number of the latest executed checkpoint, undecoded.
pub struct GetLatestCheckpointSequence;

impl RpcMethod for GetLatestCheckpointSequence {
    type Output = Value;
    const METHOD: &'static str = "sui_getLatestCheckpointSequenceNumber";
    const PARAMS: &'static [ParamDescriptor] = &[];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetLatestCheckpointSequence {
    pub fn new() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}

/// A checkpoint by digest. Shares `sui_getCheckpoint` with
/// [`GetCheckpointBySequence`].
pub struct GetCheckpointByDigest;

impl RpcMethod for GetCheckpointByDigest {
    type Output = Checkpoint;
    const METHOD: &'static str = "sui_getCheckpoint";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("cp_id", ValueKind::String)];

    fn handler() -> HandlerDescriptor<Checkpoint> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCheckpointByDigest {
    pub fn new(cp_id: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(cp_id))
    }
}

/// A checkpoint by sequence number.
pub struct GetCheckpointBySequence;

impl RpcMethod for GetCheckpointBySequence {
    type Output = Checkpoint;
    const METHOD: &'static str = "sui_getCheckpoint";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::positional("cp_seq", ValueKind::Integer)];

    fn handler() -> HandlerDescriptor<Checkpoint> {
        HandlerDescriptor::from_dict()
    }
}

impl GetCheckpointBySequence {
    pub fn new(cp_seq: u64) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().push(cp_seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn same_method_different_kinds() {
        let by_digest = GetCheckpointByDigest::new("Cp").unwrap();
        let by_sequence = GetCheckpointBySequence::new(1024).unwrap();
        assert_eq!(by_digest.method_name(), by_sequence.method_name());
        assert_eq!(by_digest.parameters(), &json!(["Cp"]));
        assert_eq!(by_sequence.parameters(), &json!([1024]));
        assert!(GetCheckpointBySequence::bind(Arguments::new().push("Cp"))
            .unwrap_err()
            .is_invalid_value_for_kind());
    }

    #[test]
    fn summary_by_number_accepts_numeric_string() {
        let sut = GetCheckpointSummary::bind(Arguments::new().push("7")).unwrap();
        assert_eq!(sut.parameters(), &json!([7]));
    }
}
