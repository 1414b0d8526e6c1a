//! Chat panel components.
//!
//! The panel is only mounted while the widget is open.

mod header;
mod input_area;
mod message_list;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message_list::ChatMessageList;
