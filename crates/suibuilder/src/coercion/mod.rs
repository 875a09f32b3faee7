mod argument;
mod coerce;
mod coerced_value;
mod event_id;
mod sui_address;
mod sui_integer;
mod value_kind;

pub use argument::*;
pub use coerce::*;
pub use coerced_value::*;
pub use event_id::*;
pub use sui_address::*;
pub use sui_integer::*;
pub use value_kind::*;
