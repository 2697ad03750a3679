mod checkout;
mod verify_session;
mod webhook;

pub use checkout::*;
pub use verify_session::*;
pub use webhook::*;
