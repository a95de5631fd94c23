pub mod debounce;
pub mod session;

pub use debounce::Debounce;
pub use session::{PreviewState, Session, SessionCommand};
