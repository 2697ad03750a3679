mod list_contacts;
mod reply_contact;
mod submit_contact;

pub use list_contacts::{ListContactsError, ListContactsUseCase};
pub use reply_contact::{
    ReplyContactCommand, ReplyContactCommandError, ReplyContactError, ReplyContactUseCase,
};
pub use submit_contact::{
    SubmitContactCommand, SubmitContactCommandError, SubmitContactError, SubmitContactUseCase,
};
