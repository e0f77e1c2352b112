#![forbid(unsafe_code)]

//! nestdnd public facade: drag sessions over a two-level hierarchy.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the pure engine from `nestdnd-core` and adds the stateful
//! piece applications actually hold: a [`DragSession`] that owns the tree,
//! tracks the gesture, and commits validated moves.
//!
//! The split mirrors the architecture: everything in the core is a pure
//! function an input layer may call as often as it likes (once per pointer
//! tick, say); the session is the one place state lives.
//!
//! # Example
//!
//! ```
//! use nestdnd::{DndConfig, DragOperation, DragSession, Item};
//!
//! let tree: Vec<Item> = vec![
//!     Item::new(1, "Alpha"),
//!     Item::group(2, "Inbox").child(Item::new(3, "Beta")),
//!     Item::new(4, "Delta"),
//! ];
//!
//! let mut session = DragSession::with_config(tree, DndConfig::new()).unwrap();
//! session.drag_start(1);
//! assert_eq!(session.drag_over(2), Some(DragOperation::ItemToGroup));
//! assert!(session.can_drop_on(2));
//! assert!(session.drag_end());
//!
//! // Alpha now lives at the end of the Inbox group.
//! assert_eq!(session.items()[0].children().last().unwrap().label(), "Alpha");
//! ```

pub mod config;
pub mod error;
pub mod session;

// --- Core re-exports -------------------------------------------------------

pub use nestdnd_core::{
    DragEvent, DragOperation, DropValidation, FlatItem, Found, Item, ItemId, ItemKind, Position,
    can_drop, determine_drag_operation, find_item, first_duplicate_id, flatten_items, insert_item,
    item_count, items_at_level, move_item, normalize_parents, remove_item,
};

// --- Session re-exports ----------------------------------------------------

pub use config::{DndConfig, DragEndFn, DragStartFn, DropFn, ValidateDropFn};
pub use error::SessionError;
pub use session::{DragSession, DragState};
