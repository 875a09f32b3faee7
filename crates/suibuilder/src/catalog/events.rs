use crate::prelude::*;

/// Events matching an [`EventQuery`], paged. Parameters are sent as one
/// keyed map.
pub struct QueryEvents;

impl RpcMethod for QueryEvents {
    type Output = EventQueryEnvelope;
    const METHOD: &'static str = "sui_queryEvents";
    const PARAMS: &'static [ParamDescriptor] = &[
        ParamDescriptor::keyword("query", ValueKind::Map),
        ParamDescriptor::keyword("cursor", ValueKind::EventId).optional(),
        ParamDescriptor::keyword("limit", ValueKind::Integer).optional(),
        ParamDescriptor::keyword("descending_order", ValueKind::Boolean).optional(),
    ];
    const CONVENTION: ParamConvention = ParamConvention::Keyed;

    fn handler() -> HandlerDescriptor<EventQueryEnvelope> {
        HandlerDescriptor::from_dict()
    }
}

impl QueryEvents {
    pub fn new(query: EventQuery) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("query", query))
    }

    pub fn page(
        query: EventQuery,
        cursor: Option<EventId>,
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

/// Events emitted by one transaction.
pub struct GetEvents;

impl RpcMethod for GetEvents {
    type Output = EventBlock;
    const METHOD: &'static str = "sui_getEvents";
    const PARAMS: &'static [ParamDescriptor] =
        &[ParamDescriptor::keyword("transaction_digest", ValueKind::String)];

    fn handler() -> HandlerDescriptor<EventBlock> {
        HandlerDescriptor::factory()
    }
}

impl GetEvents {
    pub fn new(transaction_digest: &str) -> Result<SuiBuilder<Self>> {
        Self::bind(Arguments::new().with("transaction_digest", transaction_digest))
    }
}
