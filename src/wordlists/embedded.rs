//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, plus a small fallback
//! for when a word bank cannot be loaded.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Built-in bank used when the configured one is unavailable
pub const FALLBACK_WORDS: &[&str] = &[
    "ABOUT", "BRAVE", "CHAIR", "CRANE", "DANCE", "EAGLE", "FLAME", "GHOST", "HOUSE", "LIGHT",
    "MONEY", "NIGHT", "OCEAN", "PIANO", "PLANT", "QUEEN", "RIVER", "SLATE", "STONE", "TIGER",
    "TRAIN", "WATER", "WORLD", "YOUTH",
];
