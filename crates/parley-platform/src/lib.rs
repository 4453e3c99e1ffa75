pub mod clipboard;
pub mod paths;

pub use clipboard::{copy_text, Clipboard};
pub use paths::{config_dir, config_file, data_dir, download_dir, ensure_dirs, session_dir};
