//! Cross-subsystem flows between Committee (1) and Consensus (2).

mod concurrency;
mod flows;
