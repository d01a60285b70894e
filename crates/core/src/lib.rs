mod deleter;
mod error;
mod preview;
mod recycle;
mod scanner;

pub use deleter::Deleter;
pub use error::{BoxError, CoreError};
pub use preview::PreviewLoader;
pub use recycle::{SystemTrash, Trash};
pub use scanner::Scanner;
