#![deny(unsafe_code)]

//! Library surface of the CLI crate (logging setup is reusable from tests).

pub mod logging;
