//! Command-line driver for rail2js
//!
//! Turns files holding one rail rule each into either
//! [railroad-diagrams](https://github.com/tabatkins/railroad-diagrams) calls
//! or rail notation for LaTeX. Parsing and rendering live in
//! `rail-notation`; this crate reads the inputs, picks the renderer and
//! reports failures without stopping at them.

pub mod config;
pub mod driver;

pub use config::{normalize_args, Cli, Config, Mode};
pub use driver::{Driver, DriverError, Summary};
