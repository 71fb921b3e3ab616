pub mod caption_store;
pub mod error;
pub mod image_set;
pub mod pagination;
pub mod session;
pub mod tag_import;
pub mod tags;
pub mod update;

pub use session::{CaptionSession, SaveStatus, SlotView};
pub use update::Update;
