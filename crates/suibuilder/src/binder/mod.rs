mod arguments;
mod bind;
mod bound_fields;
mod convention;
mod param_descriptor;

pub use arguments::*;
pub use bind::*;
pub use bound_fields::*;
pub use convention::*;
pub use param_descriptor::*;
