//! Embedded word catalog
//!
//! The catalog compiled into the binary at build time from `data/words.txt`.

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
