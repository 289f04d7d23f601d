//! Benchmark-only crate; see `benches/ingest.rs`.
