mod banner;
mod init;
mod modes;

pub use banner::run_banner;
pub use init::{run_init, InitArgs};
pub use modes::run_modes;
