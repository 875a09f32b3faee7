mod event_query;
mod transaction_query;

pub use event_query::*;
pub use transaction_query::*;
