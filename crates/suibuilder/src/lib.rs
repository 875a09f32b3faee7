mod binder;
mod builder;
mod catalog;
mod coercion;
mod models;
mod query;
mod responses;
mod transport;

pub mod prelude {
    // INTERNAL MODULES
    pub use crate::binder::*;
    pub use crate::builder::*;
    pub use crate::catalog::*;
    pub use crate::coercion::*;
    pub use crate::models::*;
    pub use crate::query::*;
    pub use crate::responses::*;
    pub use crate::transport::*;

    // STD
    pub use std::{marker::PhantomData, str::FromStr, sync::RwLock};

    // EXTERNAL CRATES
    pub use derive_builder::Builder;
    pub use derive_more::{Deref, IsVariant};
    pub use getset::{CopyGetters, Getters};
    pub use indexmap::IndexMap;
    pub use log::{debug, info, trace, warn};
    pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
    pub use serde_json::Value;
    pub use serde_with::{DisplayFromStr, PickFirst, serde_as};
    pub use thiserror::Error as ThisError;
}

pub use prelude::*;
