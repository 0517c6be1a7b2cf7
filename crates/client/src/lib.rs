//! Headless client for the horde simulation.
//!
//! The `horde` binary is the composition root: it reads [`ClientConfig`]
//! from the environment, installs logging, loads content through
//! `horde-content`, builds a `horde-runtime` session and steps it until the
//! run ends. An [`AutoPilot`] stands in for player input.
pub mod autopilot;
pub mod config;
pub mod logging;

pub use autopilot::AutoPilot;
pub use config::ClientConfig;
