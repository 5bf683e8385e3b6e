//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: the input
//! system only knows which keys went down, and the observers decide what a
//! key means in the current state.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – logical key presses (slide, restart, quit)
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod gamestate;
pub mod input;
pub mod switchdebug;
