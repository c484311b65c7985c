//! HTTP transport and response normalization.
//!
//! Every request goes through [`Transport`], which is the single point where
//! HTTP statuses and transport failures become typed errors. Response bodies
//! are then unwrapped according to an [`Envelope`] candidate table and
//! decoded into typed entities.

mod client;
mod envelope;
mod request;

pub(crate) use client::{JsonResponse, Transport};
pub use envelope::Envelope;
pub(crate) use envelope::{decode_many, decode_one};
pub(crate) use request::{Call, static_path};
