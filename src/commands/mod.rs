#![allow(clippy::needless_pass_by_value)]

pub mod batch;
pub mod extract;
