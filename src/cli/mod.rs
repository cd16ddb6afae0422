//! # CLI Module
//!
//! This module provides the command-line interface layer for Spopcli, a bulk
//! popularity checker for Spotify tracks. It implements the user-facing
//! commands and coordinates between link extraction, the fetch loop, result
//! aggregation and export.
//!
//! ## Commands
//!
//! - [`check`] - The main flow: read pasted links from a file or stdin,
//!   extract track IDs, resolve popularity scores against the Spotify Web
//!   API, print the ranked table and export it as CSV
//! - [`search`] - Look up tracks by name (optionally narrowed by artist) and
//!   print the matches with their popularity
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Extraction / Size Check (no network yet)
//!     ↓
//! Fetch Loop (Spotify Integration, rate limited)
//!     ↓
//! Aggregation (count, mean, max; stable sort by score)
//!     ↓
//! Output (tabled render + CSV export)
//! ```
//!
//! Each invocation is independent; nothing but the cached API token survives
//! between runs.
//!
//! ## Error Handling Philosophy
//!
//! Request-level conditions (missing credentials, too many links, no links,
//! nothing resolved) are surfaced to the user with a clear message. Item-level
//! lookup failures are absorbed: the affected track is dropped and only an
//! aggregate "N lookups failed" warning is printed, because one bad link must
//! never abort a full batch.

mod check;
mod search;

pub use check::check;
pub use search::search;
