mod checkpoints;
mod coins;
mod decode;
mod events;
mod move_package;
mod objects;
mod system;
mod transactions;

pub use checkpoints::*;
pub use coins::*;
pub(crate) use decode::*;
pub use events::*;
pub use move_package::*;
pub use objects::*;
pub use system::*;
pub use transactions::*;
