// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            content::ContentCommandService,
            tags::{TagCommandService, TagReconciler},
        },
        ports::{security::TokenManager, storage::FileUploader, time::Clock},
        queries::{
            catalog::CatalogQueryService, content::ContentQueryService, tags::TagQueryService,
            unified::UnifiedContentService,
        },
    },
    domain::{
        category::CategoryRepository, content::ContentRepositories,
        exchange_rate::ExchangeRateRepository, tag::TagRepository,
    },
};

/// Repositories and adapters the application layer is wired with.
#[derive(Clone)]
pub struct ServiceDependencies {
    pub content_repos: ContentRepositories,
    pub tag_repo: Arc<dyn TagRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub exchange_rate_repo: Arc<dyn ExchangeRateRepository>,
    pub uploader: Arc<dyn FileUploader>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub unified_content: Arc<UnifiedContentService>,
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            content_repos,
            tag_repo,
            category_repo,
            exchange_rate_repo,
            uploader,
            token_manager,
            clock,
        } = deps;

        let reconciler = Arc::new(TagReconciler::new(Arc::clone(&tag_repo)));

        let content_commands = Arc::new(ContentCommandService::new(
            content_repos.clone(),
            reconciler,
            uploader,
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(
            content_repos.clone(),
            Arc::clone(&clock),
        ));
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));
        let tag_queries = Arc::new(TagQueryService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&exchange_rate_repo),
            Arc::clone(&clock),
        ));
        let unified_content = Arc::new(UnifiedContentService::new(
            content_repos,
            tag_repo,
            category_repo,
            exchange_rate_repo,
            Arc::clone(&clock),
        ));

        Self {
            content_commands,
            content_queries,
            tag_commands,
            tag_queries,
            catalog_queries,
            unified_content,
            token_manager,
            clock,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
