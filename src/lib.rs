pub mod app;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod sample;
pub mod source;
pub mod state;
pub mod summary;

pub use app::router;
pub use config::AppConfig;
pub use errors::{AppError, FetchError, MapError};
pub use mapper::map_clicks;
pub use models::{DisplayClick, RawClick, Timezone};
pub use source::{get_clicks_data, FetchOutcome, ShortIoClient};
pub use state::AppState;
