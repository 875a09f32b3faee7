mod checkpoints;
mod coins;
mod events;
mod move_package;
mod objects;
mod registry;
mod system;
mod transactions;

pub use checkpoints::*;
pub use coins::*;
pub use events::*;
pub use move_package::*;
pub use objects::*;
pub use registry::*;
pub use system::*;
pub use transactions::*;
