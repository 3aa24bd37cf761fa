// amc-api: wire types and HTTP clients for the radio-controller and active-mode services

pub mod active_mode;
pub mod error;
pub mod radio_controller;
pub mod transport;
pub mod types;

pub use active_mode::ActiveModeClient;
pub use error::Error;
pub use radio_controller::RadioControllerClient;
pub use transport::{TlsMode, TransportConfig};
