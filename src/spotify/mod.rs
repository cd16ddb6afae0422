//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API operations the
//! popularity checker needs: authentication and track metadata retrieval. It
//! abstracts away HTTP requests, the token exchange and rate-limit quirks,
//! providing a clean Rust interface for the higher-level fetch loop.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Fetch Loop)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client Credentials)
//!     └── Track Operations (Single, Batch, Search)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 Client Credentials flow: the client ID
//! and secret are exchanged for a short-lived application token via
//! `POST /api/token` with HTTP Basic authentication. No user consent is
//! involved because the popularity score is public catalog data; there is no
//! refresh token, an expired token is simply re-requested.
//!
//! ## Track Operations
//!
//! [`tracks`] covers the endpoints the checker uses:
//! - `GET /tracks/{id}` - single track lookup (singleton mode)
//! - `GET /tracks?ids=...` - up to 50 tracks per call (batch mode); unknown
//!   IDs come back as `null` entries rather than errors
//! - `GET /search?q=...&type=track` - search by track name and artist
//!
//! ## Error Handling
//!
//! - 429 Too Many Requests responses are handled by honoring the
//!   `Retry-After` header (sleep and retry once for delays up to 120
//!   seconds; a second 429 is an error)
//! - 502 Bad Gateway responses are retried after a short delay
//! - All other HTTP and network errors are propagated to the caller, which
//!   decides whether to drop the affected item or abort
//!
//! ## Error Types
//!
//! All functions return `Result` types:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - token exchange errors

pub mod auth;
pub mod tracks;
