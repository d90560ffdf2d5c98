pub mod env;
pub mod error;
pub mod event;

pub use env::{ConsulInfo, EnvironmentInfo, DEFAULT_ENVIRONMENT_FILE};
pub use error::{IngestError, Result};
pub use event::{Check, CheckEvent, Client, Thresholds, THRESHOLD_UNSET};
