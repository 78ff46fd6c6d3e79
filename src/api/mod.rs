//! API Module - Embedding Surface
//!
//! What a display layer consumes: a session handle per subject and a
//! point-in-time status view. Engine internals live in `crate::logic`.

pub mod session;
pub mod status;

pub use session::VerificationSession;
pub use status::PipelineStatus;
