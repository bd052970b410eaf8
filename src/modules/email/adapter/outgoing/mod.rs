pub mod smtp_relay;

pub use smtp_relay::SmtpContactRelay;
