mod ask_tutor;

pub use ask_tutor::{AskTutorCommand, AskTutorCommandError, AskTutorError, AskTutorUseCase};
