#![forbid(unsafe_code)]

//! Core: hierarchy model and the pure drag-operation engine.
//!
//! # Role in nestdnd
//! `nestdnd-core` is the pointer-free heart of the library. It knows nothing
//! about input devices, collision detection, or rendering: every operation is
//! a pure function over an immutable tree of [`Item`]s, returning positions,
//! classifications, verdicts, or a fresh tree.
//!
//! # Primary responsibilities
//! - **Item model**: a generic two-kind node (`Item`/`Group`) with an opaque
//!   payload carried verbatim through every transformation.
//! - **Locator**: resolve an id to its item and structural [`Position`].
//! - **Classifier**: name an in-progress drag as one of six [`DragOperation`]s.
//! - **Validator**: decide drop legality under depth and nesting constraints.
//! - **Tree editor**: remove / insert / move, copy-on-write.
//! - **Flattener**: a depth-annotated linear view of the tree.
//!
//! # How it fits in the system
//! The session layer (`nestdnd`) owns the single mutable tree value and a
//! drag-gesture state machine; it calls into this crate once per pointer tick
//! and adopts the trees the editor returns. Concurrent readers of a previous
//! tree value are unaffected: the editor never mutates in place.
//!
//! # Example
//!
//! ```
//! use nestdnd_core::{Item, find_item, move_item};
//!
//! let tree: Vec<Item> = vec![
//!     Item::new("a", "Alpha"),
//!     Item::group("g1", "Group One")
//!         .child(Item::new("b", "Beta"))
//!         .child(Item::new("c", "Gamma")),
//! ];
//!
//! let found = find_item(&tree, &"c".into()).unwrap();
//! assert_eq!(found.position.index, 1);
//! assert_eq!(found.position.level, 1);
//!
//! // Pull "b" out of the group to the front of the root sequence.
//! let moved = move_item(&tree, &"b".into(), None, 0);
//! let b: nestdnd_core::ItemId = "b".into();
//! assert_eq!(moved[0].id(), &b);
//! assert!(moved[0].parent_id().is_none());
//! ```

pub mod edit;
pub mod event;
pub mod flatten;
pub mod item;
pub mod locate;
pub mod operation;
pub mod position;
pub mod validate;

pub use edit::{insert_item, move_item, normalize_parents, remove_item};
pub use event::DragEvent;
pub use flatten::{FlatItem, flatten_items};
pub use item::{Item, ItemId, ItemKind, first_duplicate_id, item_count};
pub use locate::{Found, find_item, items_at_level};
pub use operation::{DragOperation, determine_drag_operation};
pub use position::Position;
pub use validate::{DropValidation, can_drop};
