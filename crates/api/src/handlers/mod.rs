//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `setlist_db` and map
//! errors via [`crate::error::AppError`].

pub mod artists;
pub mod fallback;
pub mod genres;
pub mod health;
pub mod playlists;
pub mod songs;
