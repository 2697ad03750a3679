mod reply_contact_service;
mod submit_contact_service;

pub use reply_contact_service::ReplyContactService;
pub use submit_contact_service::{ListContactsService, SubmitContactService};
