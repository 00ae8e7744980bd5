//! Nocturne Protocol - Wire types shared with the game backend
//!
//! This crate contains everything the client and backend agree on:
//! - The response envelope every endpoint wraps its payload in
//! - Error classification codes
//! - Request bodies
//! - Endpoint path constructors
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde, serde_json, and the domain types
//! 2. **No business logic** - pure data types and serialization
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod dto;
pub mod requests;
pub mod responses;
pub mod routes;

pub use dto::{
    AuthPayload, BoardState, BoardTurn, ClaimedRewards, RewardGrant, UserData, VersusRoster,
};
pub use requests::{
    CreateCharacterRequest, CreateItemRequest, LoginRequest, RegisterRequest, UpdateItemRequest,
    VersusFightRequest,
};
pub use responses::{ErrorCode, ResponseResult};
