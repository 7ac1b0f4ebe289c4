use std::sync::Arc;

use cooksmart_core::application::CooksmartService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CooksmartService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CooksmartService) -> Self {
        Self { args, service }
    }
}
