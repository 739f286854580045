mod email;

pub use email::{HttpEmailSender, IEmailSender, InMemoryEmailSender, LogEmailSender, SentEmail};
