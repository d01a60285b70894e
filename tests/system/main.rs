#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

#[path = "../common/mod.rs"]
mod common;

mod workflow;
