// Dossier: simulated OSINT profile discovery.
//
// This is the library root. Each module corresponds to a stage of the
// result generation, filtering, and progressive-reveal pipeline.

pub mod config;
pub mod filter;
pub mod output;
pub mod reveal;
pub mod session;
pub mod synth;
