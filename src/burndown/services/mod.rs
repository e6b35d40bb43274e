//! Timeline compression, projection, and the background scanner.

mod config;
mod projector;
pub mod scanner;
pub mod timeline;

pub use config::{ScannerConfig, TrackingMode};
pub use projector::SprintProjector;
pub use scanner::{
    Scanner, ScannerCommand, ScannerError, ScannerHandle, ScannerPorts, ScannerResult,
    StatusResponse,
};
pub use timeline::{CompressedTimeline, Dated};
