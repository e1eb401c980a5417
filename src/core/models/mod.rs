pub mod board;
pub mod column;
pub mod task;

// Board is the snapshot the UI swaps wholesale; the rest are its building blocks
pub use board::{Board, DragLocation, DragResult, DropTarget};
pub use column::Column;
pub use task::{Priority, Task, TaskDraft};
