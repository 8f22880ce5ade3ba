pub mod pointer;

pub use pointer::{PointerMoveListener, WindowPointerSource};
