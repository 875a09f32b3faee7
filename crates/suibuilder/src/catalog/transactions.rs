use crate::prelude::*;

const DIGESTS: ValueKind = ValueKind::Array(&ValueKind::String);
const OPTIONS: ParamDescriptor = ParamDescriptor::keyword("options", ValueKind::Map).optional();

fn with_transaction_read_defaults(fields: BoundFields) -> BoundFields {
    fields.or_default("options", || OptionsFamily::TransactionRead.defaults())
}

/// Total number of transactions the node has processed, undecoded.
pub struct GetTotalTxCount;

impl RpcMethod for GetTotalTxCount {
    type Output = Value;
    const METHOD: &'static str = "sui_getTotalTransactionNumber";
    const PARAMS: &'static [ParamDescriptor] = &[];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetTotalTxCount {
    pub fn new() -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new())
    }
}

/// One transaction by digest, with effects and events unless the caller
/// sends its own `options`.
pub struct GetTx;

impl RpcMethod for GetTx {
    type Output = TxResponse;
    const METHOD: &'static str = "sui_getTransaction";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::keyword("digest", ValueKind::String), OPTIONS];

    fn handler() -> HandlerDescriptor<TxResponse> {
        HandlerDescriptor::from_dict()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_transaction_read_defaults(fields)
    }
}

impl GetTx {
    pub fn new(digest: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("digest", digest))
    }

    pub fn with_options(digest: &str, options: TransactionReadOptions) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("digest", digest)
                .with("options", options),
        )
    }

    pub fn default_options() -> CoercedValue {
        OptionsFamily::TransactionRead.defaults()
    }
}

pub struct GetMultipleTx;

impl RpcMethod for GetMultipleTx {
    type Output = TxResponseArray;
    const METHOD: &'static str = "sui_multiGetTransactions";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::keyword("digests", DIGESTS), OPTIONS];

    fn handler() -> HandlerDescriptor<TxResponseArray> {
        HandlerDescriptor::factory()
    }

    fn finalize(fields: BoundFields) -> BoundFields {
        with_transaction_read_defaults(fields)
    }
}

impl GetMultipleTx {
    pub fn new(digests: &[&str]) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("digests", digests.to_vec()))
    }

    pub fn default_options() -> CoercedValue {
        OptionsFamily::TransactionRead.defaults()
    }
}

/// Transactions matching a [`TransactionQuery`], paged. Parameters are
/// sent as one keyed map.
pub struct GetTxs;

impl RpcMethod for GetTxs {
    type Output = TransactionQueryEnvelope;
    const METHOD: &'static str = "sui_queryTransactions";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::keyword("query", ValueKind::Map),
        ParamDescriptor::keyword("cursor", ValueKind::String).optional(),
        ParamDescriptor::keyword("limit", ValueKind::Integer).optional(),
        ParamDescriptor::keyword("descending_order", ValueKind::Boolean).optional(),
    ];
    const CONVENTION: ParamConvention = ParamConvention::Keyed;

    fn handler() -> HandlerDescriptor<TransactionQueryEnvelope> {
        HandlerDescriptor::from_dict()
    }
}

impl GetTxs {
    pub fn new(query: TransactionQuery) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("query", query))
    }

    pub fn page(
        query: TransactionQuery,
        cursor: Option<&str>,
        limit: Option<u64>,
        descending_order: bool,
    ) -> Result<SuiBuilder<Self>> {
        Self::bind(
            Arguments::new()
                .with("query", query)
                .with("cursor", cursor)
                .with("limit", limit)
                .with("descending_order", descending_order),
        )
    }
}

/// Digests of the transactions in `[start, end)`, undecoded.
pub struct GetTransactionsInRange;

impl RpcMethod for GetTransactionsInRange {
    type Output = Value;
    const METHOD: &'static str = "sui_getTransactionsInRangeDeprecated";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::keyword("start", ValueKind::Integer),
        ParamDescriptor::keyword("end", ValueKind::Integer),
    ];

    fn handler() -> HandlerDescriptor<Value> {
        HandlerDescriptor::passthrough()
    }
}

impl GetTransactionsInRange {
    pub fn new(start: u64, end: u64) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("start", start).with("end", end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn get_tx_default_options() {
        let sut = GetTx::new("Dg1").unwrap();
        assert_eq!(
            sut.parameters(),
            &json!(["Dg1", {"showEffects": true, "showEvents": true, "showInput": false}])
        );
    }

    #[test]
    fn get_tx_typed_options() {
        let options = TransactionReadOptionsBuilder::default()
            .show_input(true)
            .build()
            .unwrap();
        let sut = GetTx::with_options("Dg1", options).unwrap();
        assert_ne!(sut.field("options"), Some(&GetTx::default_options()));
    }

    #[test]
    fn multiple_tx() {
        let sut = GetMultipleTx::new(&["A", "B"]).unwrap();
        assert_eq!(sut.parameters()[0], json!(["A", "B"]));
        assert_eq!(sut.parameters()[1], GetMultipleTx::default_options().to_json());
    }

    #[test]
    fn query_transactions_keyed() {
        let query = TransactionQuery::input_object("0x5").unwrap();
        let sut = GetTxs::page(query, Some("Dg9"), None, false).unwrap();
        assert_eq!(
            sut.parameters(),
            &json!([{
                "query": {"InputObject": "0x5"},
                "cursor": "Dg9",
                "descending_order": false
            }])
        );
    }

    #[test]
    fn range_needs_integers() {
        let sut = GetTransactionsInRange::bind(
            Arguments::new().with("start", "zero").with("end", 10),
        );
        assert!(sut.unwrap_err().is_invalid_value_for_kind());
        assert_eq!(
            GetTransactionsInRange::new(0, 10).unwrap().parameters(),
            &json!([0, 10])
        );
    }

    #[test]
    fn no_parameters() {
        assert_eq!(GetTotalTxCount::new().unwrap().parameters(), &json!([]));
    }
}
