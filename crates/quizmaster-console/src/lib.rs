//! quizmaster-console — Console implementations.
//!
//! Implements the core's `Console` trait twice: `StdConsole` talks to a real
//! terminal over stdin/stdout, and `MockConsole` replays a script so sessions
//! can run unattended in tests.

pub mod mock;
pub mod stdio;

pub use mock::MockConsole;
pub use stdio::StdConsole;
