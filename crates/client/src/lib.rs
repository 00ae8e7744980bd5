//! Nocturne Client - the UI-framework-agnostic core of the game client
//!
//! Everything a presentation layer needs to drive the game's screens lives
//! here, behind plain state holders and async methods:
//!
//! - [`ports`] - outbound interfaces: the object-safe HTTP boundary and the
//!   platform providers (storage, sleep)
//! - [`infrastructure`] - gateway adapters (reqwest on native, gloo-net on
//!   wasm) and test providers
//! - [`application`] - typed API wrapper, error taxonomy, and one service
//!   per backend area
//! - [`session`] - the explicit auth session (token + cached user) with a
//!   subscribe/notify contract
//! - [`state`] - the view-state controllers: quest list, combat replay,
//!   versus, board
//!
//! Presentation bindings subscribe to controller state, render snapshots,
//! and feed user intents back in. They never touch transport types.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod session;
pub mod state;
