// Library crate: the viewer shell and its state, independent of any renderer.
// Hosts (the headless driver, the wasm bridge) drive it through actions.

pub mod catalog;
pub mod command;
pub mod fixtures;
pub mod harness;
pub mod keyboard;
pub mod shell;
pub mod state;
