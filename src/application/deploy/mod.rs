//! Deploy Module
//!
//! Orchestrates one incremental deployment run.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `remote_dirs` - Remote directory materialization (`RemoteDirs`)
//! - `result` - Result types (`DeployReport`, `DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use hashdeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(detector, mapper, connector, DeployOptions::new());
//! let outcome = use_case.run(&mut prompt, &events, |changes| print_pending(changes))?;
//! ```

mod options;
mod remote_dirs;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use remote_dirs::RemoteDirs;
pub use result::{DeployOutcome, DeployReport, FileFailure};
pub use use_case::{DeployUseCase, CONFIRM_QUESTION};
