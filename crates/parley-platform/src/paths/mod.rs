mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, config_file, data_dir, download_dir, session_dir};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_parley() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("parley"),
            "config_dir should end with 'parley', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_parley() {
        let path = data_dir().unwrap();
        assert!(
            path.ends_with("parley"),
            "data_dir should end with 'parley', got: {path:?}"
        );
    }

    #[test]
    fn config_file_has_correct_name() {
        let path = config_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.toml");
        assert!(path.parent().unwrap().ends_with("parley"));
    }

    #[test]
    fn session_dir_is_inside_data_dir() {
        let session = session_dir().unwrap();
        let data = data_dir().unwrap();
        assert!(
            session.starts_with(&data),
            "session_dir should be inside data_dir: session={session:?}, data={data:?}"
        );
        assert_eq!(session.file_name().unwrap().to_str().unwrap(), "session");
    }

    #[test]
    fn download_dir_ends_with_images() {
        let path = download_dir().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "images");
    }
}
