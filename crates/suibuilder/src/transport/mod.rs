mod id_stepper;
mod rpc_request;
mod rpc_response;
mod sui_rpc_client;
#[allow(clippy::module_inception)]
mod transport;

pub use id_stepper::*;
pub use rpc_request::*;
pub use rpc_response::*;
pub use sui_rpc_client::*;
pub use transport::*;
