// crates/datex2-rs/src/types/mod.rs

//! The public DATEX II object model.
//!
//! These are the types users construct and inspect. XML mapping lives in
//! the `resolver` (parse) and `builder` (serialize) modules.

pub mod code_list;
pub mod common;
pub mod energy;
pub mod facilities;
pub mod location;
pub mod units;

pub use code_list::{CodeList, CodeListRegistry};
pub use common::*;
pub use energy::*;
pub use facilities::*;
pub use location::*;
pub use units::*;

/// Removes duplicates, keeping the first occurrence of each value in order.
pub(crate) fn distinct<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in items {
        if out.contains(&item) {
            log::trace!("Dropping duplicate collection entry");
        } else {
            out.push(item);
        }
    }
    out
}
