//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`info`] - Header and mip chain summary
//! - [`decode`] - TEX to PNG
//! - [`encode`] - PNG to TEX
//! - [`from_dds`] - DDS to TEX repackaging
//! - [`config`] - Configuration file management

pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod from_dds;
pub mod info;
