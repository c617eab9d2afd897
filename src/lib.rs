pub mod config;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use config::{Config, ConfigError};
pub use models::book::{Book, SearchResultPage};
pub use models::session::{SearchSession, SearchStatus};
pub use services::controller::{FetchMode, PageRequest, SearchController};
pub use services::gateway::{GatewayError, OpenLibraryGateway, SearchGateway, PAGE_SIZE};
