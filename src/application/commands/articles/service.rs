// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::article::ArticleWriteRepository,
};

pub const DEFAULT_AUTHOR: &str = "Weekly Diet Planner Team";
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Admin-side article writes. Input is validated here, before the repository
/// sees it; the repository itself never re-validates.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            slugger,
            clock,
        }
    }
}
