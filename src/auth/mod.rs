//! Authentication
//!
//! Token storage, unverified claim decoding, and the session context.

pub mod session;
pub mod storage;
pub mod token;

pub use session::{provide_session, use_session, Session, SessionState, SessionUser};
