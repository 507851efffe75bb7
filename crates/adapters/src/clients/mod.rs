//! Remote client adapters
//!
//! `http` talks to another service instance over REST; `local` reads the
//! in-process stores directly for the monolithic-modular deployment and
//! doubles as the fake implementation in module tests.

pub mod http;
pub mod local;
