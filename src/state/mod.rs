pub mod drag;
pub mod drop_target;
pub mod tween;
pub mod viewer;

pub use drag::{DragBounds, DragController};
pub use drop_target::{DropTarget, image_entries, is_image_type};
pub use tween::Tween;
pub use viewer::{ViewerAction, ViewerState};
