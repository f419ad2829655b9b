#![forbid(unsafe_code)]

pub mod error;
pub mod sink;
pub mod sink_fs;
pub mod stats;

pub mod util {
    pub mod cstr;
}

pub mod container {
    pub mod header;
    pub mod tags;
}

pub mod index {
    pub mod objtab;
}

pub mod read {
    pub mod assemble;
    pub mod chunk;
    pub mod extract;
    pub mod reconstruct;
}

// Re-exports: stable API surface
pub use error::{Result, YaffsError};
pub use read::extract::{ExtractOptions, extract, extract_from};
pub use sink::EntrySink;
pub use sink_fs::FsSink;
pub use stats::ExtractStats;
