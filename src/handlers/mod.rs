#[cfg(feature = "ssr")]
mod chat;
#[cfg(feature = "ssr")]
pub use chat::*;
