pub mod email_sender;
pub mod notifications;

pub use email_sender::{EmailSendError, EmailSender};
pub use notifications::{
    ContactReplyNotifier, EnrollmentNotice, EnrollmentNotifier, NotificationError,
};
