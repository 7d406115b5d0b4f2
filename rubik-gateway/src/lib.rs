//! HTTP API gateway for the rubik scramble-and-solve service.
//!
//! Exposes `POST /solve`, which scrambles a cube (or accepts one as sticker
//! colours), solves it with the configured two-phase solver and reports the
//! before and after states, plus liveness and solver readiness probes.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
