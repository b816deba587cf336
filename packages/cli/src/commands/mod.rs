pub mod compose;
pub mod init;
pub mod inspect;

pub use compose::{compose, ComposeArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
