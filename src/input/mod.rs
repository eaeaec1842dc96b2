pub mod dispatcher;
pub mod snapshot;

pub use dispatcher::handle_input;
pub use snapshot::{EdgeDetector, InputSnapshot};
