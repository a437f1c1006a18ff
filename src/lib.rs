//! Table lexicalization
//!
//! Reads a semantically annotated table, reduces it according to the
//! background/interest parameters, serializes it as annotated triples and
//! asks a text-generation backend to describe it. The result is written as
//! an HTML fragment.
//!
//! ## Architecture
//!
//! ```text
//! input.json + inputData.json
//!     → tablex_core (select → resolve → serialize → prompt)
//!     → tablex_agentic (chat completion)
//!     → output.html
//! ```
//!
//! ## Configuration
//!
//! - `GPT_KEY`: backend API key (sent as the `api-key` header)
//! - `GPT_ENDPOINT`: full chat-completions URL
//!
//! Both may come from a `.env` file.

pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod render;

// Re-exports for convenience
pub use config::{BackendConfig, RunPaths};
pub use error::{ConfigError, InputError, RunError};
pub use pipeline::{prepare, run, run_with_client};
pub use render::Fragment;
