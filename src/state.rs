use crate::config::AppConfig;
use crate::source::ShortIoClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: ShortIoClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = ShortIoClient::from_config(&config);
        Self {
            config: Arc::new(config),
            client,
        }
    }
}
