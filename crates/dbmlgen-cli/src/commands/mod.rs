pub mod generate;
pub mod init;
pub mod print;

pub use generate::cmd_generate;
pub use init::cmd_init;
pub use print::cmd_print;
