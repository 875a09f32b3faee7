mod handler;
mod options;
mod rpc_call;
mod rpc_method;
mod sui_builder;

pub use handler::*;
pub use options::*;
pub use rpc_call::*;
pub use rpc_method::*;
pub use sui_builder::*;
