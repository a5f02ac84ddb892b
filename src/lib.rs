//! Workspace tooling package.
//!
//! Holds no code. It exists so `rusty-hook` can install the pre-commit
//! checks configured in the root `Cargo.toml`.
