/// Unwrap a `Result`, or print the error to stderr and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod snapshot_ops;
pub mod translit_ops;

use lipi_core::Mode;

pub(crate) fn parse_mode(name: &str) -> Mode {
    die!(name.parse::<Mode>(), "Error: {} (see `lipitool modes`)")
}
