//! Session state for the interactive pipeline.

mod session;

pub use session::ShadeSession;
