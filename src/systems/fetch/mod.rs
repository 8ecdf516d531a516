//! Background fetch pipeline between the UI and the media provider.

mod commands;
mod worker;

pub(crate) use commands::{FetchCommand, FetchResponse, LoadOp, LoadRequest};
pub(crate) use worker::spawn;
