//! # Reservoirs
//!
//! A small registry of rectangular-prism reservoirs with:
//! - Derived volume and surface area, always computed from current fields
//! - An insertion-ordered collection with remove-by-name
//! - Human-readable text export
//! - Checksummed fixed-record binary export (and import)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ReservoirManager                         │
//! │               (ordered Vec<Reservoir>)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Text Export │          │Binary Export│
//!   │  (stanzas)  │          │ (96B recs)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod reservoir;
pub mod manager;
pub mod export;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ReservoirError, Result};
pub use config::Config;
pub use reservoir::{Reservoir, ReservoirKind};
pub use manager::ReservoirManager;

// =============================================================================
// Version Info
// =============================================================================

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
