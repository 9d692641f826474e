//! Pointer input
//!
//! The pointer is an explicit service: the frame driver samples the device
//! once per frame and hands the `Pointer` to the scene, which passes it down
//! to every collider and behaviour that wants it.

mod pointer;

pub use pointer::*;
