use core::num::NonZeroUsize;
use std::sync::Arc;

use storefront_client::ProductRepository;

use crate::app::render::Renderer;

/// Per-process dependencies shared by all handlers. Read-only.
pub struct AppServices {
    pub repository: Arc<dyn ProductRepository>,
    pub renderer: Renderer,
    pub page_size: NonZeroUsize,
}
