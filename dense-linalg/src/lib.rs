#[macro_use]
mod macros;

pub mod error;
pub mod linear_algebra;

pub use error::{LinalgError, Result};
pub use linear_algebra::{Matrix, Shape, Vector};

#[cfg(test)]
pub(crate) mod test_util {
    use pretty_env_logger::env_logger;

    pub fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
