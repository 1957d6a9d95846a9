#![no_std]

extern crate alloc;

mod slots;

pub use slots::SlotBuffer;
