#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod capability;
pub mod config;
pub mod dispatch;
pub mod format;
pub mod item;
pub mod registry;

pub mod error {
    pub use anyhow::{Error, Result};

    pub use crate::{dispatch::DispatchError, item::FormatMismatch};
}
