//! # Metachain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs      # Shared builders: committees, cores, sealed votes
//! │   └── integration/     # Committee (1) ↔ Consensus (2) flows
//! └── benches/             # Committee round benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mc-tests
//! cargo test -p mc-tests integration::
//! cargo bench -p mc-tests
//! ```

pub mod fixtures;
pub mod integration;
