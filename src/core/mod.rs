//! # Core Session Logic
//!
//! Business state for Liftoff. It knows nothing about HTTP or the terminal.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │  (this module)               │
//!                 │                              │
//!                 │  • state  (session machine)  │
//!                 │  • filter (pure projection)  │
//!                 │  • config (settings)         │
//!                 │                              │
//!                 │  No I/O. No UI.              │
//!                 └──────────────┬───────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!        ┌──────────────┐                ┌──────────────┐
//!        │   graphql    │                │    render    │
//!        │  (fetches)   │                │  (consumes)  │
//!        └──────────────┘                └──────────────┘
//! ```
//!
//! The fetch happens in `main`, which feeds its outcome into [`state::App`];
//! the derived filtered view flows out to the renderer.

pub mod config;
pub mod filter;
pub mod state;
