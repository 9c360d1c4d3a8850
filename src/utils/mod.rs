pub mod executor;
pub mod paths;
pub mod shell_rc;
