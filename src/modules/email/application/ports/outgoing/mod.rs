pub mod contact_relay;

pub use contact_relay::ContactRelay;
