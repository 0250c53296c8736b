// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod runtime;
pub mod stats;
pub mod typetest;
pub mod ui;
pub mod word;
pub mod word_source;
