use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::content::ContentRepositories};

pub struct ContentQueryService {
    pub(super) repos: ContentRepositories,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentQueryService {
    pub fn new(repos: ContentRepositories, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }
}
