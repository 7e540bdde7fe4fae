//! # Lendgen SDK
//!
//! A Rust library for compiling declarative lending-pool configurations into
//! deployment-parameter source artifacts. Hand-authored, strongly-typed pool
//! definitions plus three static registries (tokens, contracts, price feeds)
//! go in; deterministic source text for the on-chain deployment contract
//! comes out.
//!
//! ## Overview
//!
//! The compiler is a synchronous, single-threaded pipeline:
//!
//! - **Registries**: injected, immutable lookup tables for tokens, venue
//!   contracts and (possibly recursive) price-feed descriptors
//! - **Configurators**: one per deployed entity (pool, interest-rate model,
//!   quota keeper, gauge, credit manager), each owning validation, code
//!   emission and human-readable reporting for its slice
//! - **Bindings generation**: six registry-derived artifacts emitted per
//!   network in declared network order
//!
//! ## Architecture
//!
//! Emission never concatenates strings ad hoc: compile steps assemble a
//! typed IR ([`emit::SourceBlock`]) rendered in a single pass, so literal
//! encoding (thousand grouping, percent compaction, identifier
//! sanitization) lives in exactly one place. Failures abort at the artifact
//! boundary: renders are staged in memory and committed to template files
//! atomically.

// Core Types
/// Supported networks and their canonical ordering
pub mod networks;
/// Token registry (decimals, per-network deployments)
pub mod tokens;
/// Contract registry and integration types
pub mod contracts;
/// Price-feed descriptor tree, registry and resolver
pub mod price_feeds;
/// The three registries bundled for injection
pub mod registries;
/// Hand-authored pool configuration objects
pub mod pool_definition;

// Compilation
/// Identifier sanitization for the emitted grammar
pub mod ident;
/// Numeric literal encoding (grouping, percent compaction)
pub mod numeric;
/// Typed emission IR and its renderer
pub mod emit;
/// Adapter configurations and their per-family emission rules
pub mod adapter_config;
/// Entity configurators (pool, gauge, quota keeper, IRM, credit manager)
pub mod configurators;
/// Whole-pool orchestration
pub mod pool_core;

// Batch Emission
/// The six registry-derived bindings targets
pub mod bindings;
/// Template splicing and atomic artifact commits
pub mod artifact;

// Infrastructure
/// Compile error taxonomy
pub mod errors;
/// Generator configuration (Config.toml)
pub mod settings;

// Re-exports for convenience
pub use bindings::{Artifact, BindingsGenerator, BindingsTarget};
pub use errors::CompileError;
pub use networks::Network;
pub use pool_core::PoolCore;
pub use registries::RegistrySet;
pub use settings::Settings;
