//! Romtag-Common: shared error handling and media file detection.
//!
//! - **Error Handling**: a common error type and result alias
//! - **Path Utilities**: media kinds and extension lists
//!
//! # Examples
//!
//! ```
//! use romtag_common::{Error, MediaKind, Result};
//! use romtag_common::paths::is_media_file;
//! use std::path::Path;
//!
//! assert!(is_media_file(Path::new("Super Mario Bros (USA).nes")));
//! assert_eq!(MediaKind::from_path(Path::new("game.chd")), Some(MediaKind::Disc));
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("roms directory"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
pub use paths::MediaKind;
