//! Presentation Layer
//!
//! Wires configuration into use cases for the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use hashdeploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &config_path, options)?;
//! let outcome = use_case.run(&mut prompt, &events, |_| {})?;
//! ```

pub mod factory;

pub use factory::{create_deploy_use_case, ConcreteDeployUseCase};
