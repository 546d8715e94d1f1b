mod log_mailer;
mod test_mailers;

pub use log_mailer::LogMailer;
pub use test_mailers::{FailingMailer, RecordingMailer};
