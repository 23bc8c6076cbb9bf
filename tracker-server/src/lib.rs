//! Task Tracker Server
//!
//! In-memory REST API for employees and the tasks assigned to them.
//!
//! ```text
//! tracker-server/src/
//! ├── core/          # config, state, server, errors
//! ├── store/         # employee and task stores, demo data
//! ├── api/           # routes and handlers
//! ├── middleware/    # request logging
//! └── utils/         # logger
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState, build_router};
pub use store::{EmployeeStore, RepoError, TaskStore};
pub use utils::init_logger;

/// Load `.env` and initialize logging from the resulting configuration
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
 _____         _      _____               _
|_   _|_ _ ___| | __ |_   _| __ __ _  ___| | _____ _ __
  | |/ _` / __| |/ /   | || '__/ _` |/ __| |/ / _ \ '__|
  | | (_| \__ \   <    | || | | (_| | (__|   <  __/ |
  |_|\__,_|___/_|\_\   |_||_|  \__,_|\___|_|\_\___|_|
    "#
    );
}
