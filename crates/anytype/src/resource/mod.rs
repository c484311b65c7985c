//! Generic resource operations.
//!
//! Every entity kind shares one implementation of list/get/create/update/
//! delete. What differs between kinds (routes, envelope candidates, payload
//! types) is data on the [`Kind`] trait.

mod handle;
mod kinds;
mod search;

pub use handle::Resource;
pub use kinds::{Kind, Mutable, Routes};
pub(crate) use search::search;
