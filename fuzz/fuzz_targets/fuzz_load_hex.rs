//! Fuzz target for the hex program loader.
//!
//! Any text must either load or return an error, never panic, and a
//! successful load must leave exactly the reported number of bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mc6502::FlatMemory;

fuzz_target!(|text: &str| {
    let mut memory = FlatMemory::new();
    if let Ok(count) = memory.load_hex(text) {
        assert!(count <= memory.size());
    }
});
