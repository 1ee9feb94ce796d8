// Adapters layer: concrete implementations for the module's two seams, the
// device client and the host control application.

pub mod fixture;
pub mod host;

pub use self::fixture::FixtureClient;
pub use self::host::{LoggingHost, RecordingHost};
