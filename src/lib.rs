#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod charging;
pub mod convert;
pub mod error;
pub mod plan;
pub mod quantity;
pub mod schedule;
pub mod state;

pub use self::error::{Error, Result};
