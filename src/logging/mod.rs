// Diagnostics go to stderr; stdout is reserved for the generated script
pub use self::logger::{log_error, log_info, log_section, log_success, log_warning};

mod logger;
