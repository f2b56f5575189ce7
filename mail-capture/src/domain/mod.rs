pub mod captured;
pub mod email;
pub mod error;
pub mod message;
pub mod transport;

pub use captured::*;
pub use email::*;
pub use error::*;
pub use message::*;
pub use transport::*;
