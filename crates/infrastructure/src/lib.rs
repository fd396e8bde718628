//! Ferrous DNS Simulator Infrastructure Layer
pub mod dns;
pub mod export;
pub mod repositories;
pub mod system;
