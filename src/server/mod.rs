pub mod accept;
pub mod listener;

pub use accept::serve;
pub use listener::{bind_first, BindError};
