//! [`Dom`](crate::Dom) implementations.

#[cfg(feature = "html")]
pub mod html;

#[cfg(target_arch = "wasm32")]
pub mod web;
