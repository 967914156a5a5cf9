//! Product list screen: search, pagination, row menu and deletion.

use std::sync::Arc;

use pa_core::catalog::filter_products;
use pa_core::ports::{NavigatorPort, Notice, NotifierPort, ProductRepositoryPort};
use pa_core::{PageSize, Pagination, Product, ProductId, Route};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::prompt::{ConfirmationPrompt, PromptSignal};

/// Product awaiting confirmation of its deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: ProductId,
    pub name: String,
}

pub struct ListViewModel {
    repo: Arc<dyn ProductRepositoryPort>,
    notifier: Arc<dyn NotifierPort>,
    navigator: Arc<dyn NavigatorPort>,
    all: Vec<Product>,
    filtered: Vec<Product>,
    search_term: String,
    pagination: Pagination,
    loading: bool,
    pending_deletion: Option<PendingDeletion>,
    opened_menu: Option<ProductId>,
}

impl ListViewModel {
    pub fn from_ports(
        repo: Arc<dyn ProductRepositoryPort>,
        notifier: Arc<dyn NotifierPort>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            repo,
            notifier,
            navigator,
            all: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            pagination: Pagination::default(),
            loading: true,
            pending_deletion: None,
            opened_menu: None,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.pagination.set_page_size(page_size, self.filtered.len());
        self
    }

    pub fn all(&self) -> &[Product] {
        &self.all
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Rows of the current page.
    pub fn page(&self) -> &[Product] {
        self.pagination.slice(&self.filtered)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.pending_deletion.as_ref()
    }

    pub fn opened_menu(&self) -> Option<&ProductId> {
        self.opened_menu.as_ref()
    }

    /// Fetch the catalog once. Failures leave the list as it was and are
    /// only logged; there is no retry.
    #[tracing::instrument(name = "list.load", skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        match self.repo.list().await {
            Ok(products) => {
                info!(count = products.len(), "Loaded products");
                self.all = products;
                self.apply_filter();
            }
            Err(err) => {
                warn!(error = %err, "Failed to load products");
            }
        }
        self.loading = false;
    }

    /// Filter by `term` and go back to the first page. Callers debounce
    /// keystrokes before reaching this.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size, self.filtered.len());
    }

    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    /// Open the row menu of `id`, or close it when it is the one open.
    pub fn toggle_menu(&mut self, id: &ProductId) {
        if self.opened_menu.as_ref() == Some(id) {
            self.opened_menu = None;
        } else {
            self.opened_menu = Some(id.clone());
        }
    }

    pub fn add_product(&self) {
        self.navigator.navigate(Route::Add);
    }

    pub fn edit_product(&self, id: &ProductId) {
        self.navigator.navigate(Route::Edit(id.clone()));
    }

    pub fn request_delete(&mut self, id: ProductId, name: impl Into<String>) {
        self.pending_deletion = Some(PendingDeletion {
            id,
            name: name.into(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// Delete the pending product. On failure the product stays listed and
    /// the user is notified; the pending deletion is cleared either way.
    #[tracing::instrument(name = "list.confirm_delete", skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_deletion.as_ref().map(|p| p.id.clone()) else {
            return;
        };

        match self.repo.delete(&id).await {
            Ok(()) => {
                info!(id = %id, "Deleted product");
                self.all.retain(|p| p.id != id);
                self.apply_filter();
            }
            Err(err) => {
                warn!(id = %id, error = %err, "Failed to delete product");
                self.notifier.notify(Notice::DeleteFailed);
            }
        }
        self.pending_deletion = None;
    }

    /// Confirmation prompt for the pending deletion, visible while one is
    /// pending.
    pub fn delete_prompt(&self, signals: UnboundedSender<PromptSignal>) -> ConfirmationPrompt {
        let prompt = ConfirmationPrompt::new(signals);
        match &self.pending_deletion {
            Some(pending) => prompt
                .with_message(format!(
                    "Are you sure you want to delete {}?",
                    pending.name
                ))
                .with_visible(true),
            None => prompt,
        }
    }

    pub async fn handle_prompt(&mut self, signal: PromptSignal) {
        match signal {
            PromptSignal::Confirm => self.confirm_delete().await,
            PromptSignal::Cancel => self.cancel_delete(),
        }
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_products(&self.all, &self.search_term);
        self.pagination.reset(self.filtered.len());
    }
}
