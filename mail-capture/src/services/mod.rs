pub mod ledger;
pub mod log_delivery;
pub mod mailer;
pub mod recorder;

pub use ledger::*;
pub use log_delivery::*;
pub use mailer::*;
pub use recorder::*;
