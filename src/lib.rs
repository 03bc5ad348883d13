pub mod escape;

pub mod hexstr;

pub mod ssid;

pub mod wire;

pub use ssid::{MAX_SSID_LEN, Ssid, UNKNOWN_SSID};
