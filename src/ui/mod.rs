//! Page model, rendering and host surface for the tools directory UI

pub mod dom;
pub mod events;
pub mod host;
pub mod notify;
pub mod page;
pub mod render;

pub use dom::{Element, Node};
pub use events::{Bindings, ClickAction, Role, UiEvent};
pub use host::{ConsoleHost, RecordingHost, UiHost};
pub use notify::{Notification, NotificationKind, Notifier, copy_to_clipboard};
pub use page::Page;
pub use render::Viewer;
