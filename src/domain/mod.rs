//! Domain Layer
//!
//! Pure sync-planning logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - SyncPlan, TransferResult, ArchiveReport
//! - `value_objects/` - Immutable value types (SyncDirection, Endpoint, FilterRule)
//! - `services/` - Path resolver, filter builder, planner
//! - `ports/` - Interface definitions for infrastructure (TransferTool, Archiver)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
