mod command;
mod form;
mod message;
mod result;
mod submission;
mod transport;
mod types;

pub use command::*;
pub use form::*;
pub use message::*;
pub use result::*;
pub use submission::*;
pub use transport::*;
pub use types::*;
