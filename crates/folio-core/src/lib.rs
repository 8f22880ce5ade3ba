//! Core of the folio portfolio page: static content, pointer parallax and
//! composition of a host-independent page tree.
//!
//! Nothing here touches a platform API. Front ends supply a [`RenderHost`]
//! and a [`PointerSource`] and hand them to [`PageComposer`].

pub mod assets;
pub mod constants;
pub mod content;
pub mod error;
pub mod html;
pub mod motion;
pub mod page;
pub mod parallax;
pub mod pointer;
pub mod section;
pub mod view;

pub use assets::*;
pub use content::*;
pub use error::*;
pub use motion::*;
pub use page::*;
pub use parallax::*;
pub use pointer::*;
pub use section::*;
pub use view::*;
