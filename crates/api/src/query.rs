//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /api/songs` (`?sortby=`).
///
/// `sortby` is kept as raw text; the whitelist in
/// `setlist_core::catalog::SongSort` decides whether it is acceptable.
#[derive(Debug, Default, Deserialize)]
pub struct SongListParams {
    pub sortby: Option<String>,
}
