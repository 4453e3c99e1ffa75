pub mod errors;
pub mod id;
pub mod sanitize;

pub use errors::{ConfigError, ParleyError, PlatformError, StoreError};
pub use id::{new_correlation_id, new_id, MessageIdGen};
pub use sanitize::sanitize_secrets;

pub type Result<T> = std::result::Result<T, ParleyError>;
