pub mod app_config;
pub mod order_file;

pub use app_config::Config;
pub use order_file::{read_json, write_json, OrderStore, StoreError};
