//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts (`Deserialize` where it arrives over HTTP)

pub mod artist;
pub mod genre;
pub mod playlist;
pub mod song;
pub mod stats;
