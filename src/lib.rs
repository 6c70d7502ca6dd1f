pub mod args;
pub mod build;
pub mod deploy;
pub mod errors;
pub mod infra;
pub mod interfaces;
pub mod start;
pub mod storage;
pub mod sync;
pub mod testing;
pub mod utils {
    pub mod cmd_utils;
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;
pub use deploy::{DeployConfig, DeployReport, deploy};
pub use errors::DeployError;
pub use start::run_app;
