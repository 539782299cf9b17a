pub mod environment;
pub mod files;
pub mod logging;
pub mod terminal;

pub use environment::get_data_dir;
pub use files::{format_path_with_tilde, validate_file_size};
pub use logging::{LogTarget, init_logging};
