mod input;
mod session;

pub use input::*;
pub use session::*;
