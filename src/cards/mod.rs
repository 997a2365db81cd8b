//! Card system: records, faces, and the ordered registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier assigned by the API
//! - `TarotCard`: Arcana + scientist record, immutable after fetch
//! - `ImageData`: Artwork URL with attribution
//! - `CardFace`: Which side is showing
//! - `CardRegistry`: Ordered deck with id lookup

pub mod definition;
pub mod face;
pub mod registry;

pub use definition::{CardId, ImageData, TarotCard};
pub use face::CardFace;
pub use registry::CardRegistry;
