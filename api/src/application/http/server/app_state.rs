use std::sync::Arc;

use menulens_core::application::MenulensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MenulensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenulensService) -> Self {
        Self { args, service }
    }
}
