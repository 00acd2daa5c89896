//! Domain Layer
//!
//! Change detection and path resolution, free of any transport.
//!
//! ## Structure
//!
//! - `entities/` - Manifest and ChangeSet
//! - `value_objects/` - hashes, glob patterns, ignore and mapping rules
//! - `services/` - ChangeDetector and PathMapper
//! - `ports/` - interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
