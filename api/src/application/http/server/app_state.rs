use std::sync::Arc;

use beautyscan_core::application::BeautyScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BeautyScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BeautyScanService) -> Self {
        Self { args, service }
    }
}
