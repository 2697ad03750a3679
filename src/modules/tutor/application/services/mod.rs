mod ask_tutor_service;

pub use ask_tutor_service::AskTutorService;
