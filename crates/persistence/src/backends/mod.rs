//! Repository backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | In-memory | always | Ordered map, lost on restart |
//! | SQLite | `sqlite` | Embedded database, file or in-memory |

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;
