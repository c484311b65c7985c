//! Authentication: the API key secret and the challenge handshake.
//!
//! A key is obtained in two steps. [`create_challenge`](Auth::create_challenge)
//! makes the desktop app display a 4-digit code; the user types it back and
//! [`exchange_challenge`](Auth::exchange_challenge) trades it for a key.
//! Neither call is retried or cached.

mod api_key;
mod handshake;

pub use api_key::ApiKey;
pub use handshake::{ApiKeyGrant, Auth, AuthChallenge, Handshake};
