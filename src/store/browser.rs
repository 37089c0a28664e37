//! Fetch/reconcile sequencing for the storefront.

use tracing::debug;

use crate::api::Agent;
use crate::client::{DashboardClient, Result};
use crate::store::count::{extract_count, extract_positive};
use crate::store::pager::Pager;

/// Drives the storefront: one [`Pager`] plus the fetch sequence that keeps
/// it honest.
///
/// The two upstream endpoints are independent, so ordering is the whole
/// game here: the count is fetched before the opening page so jumps can
/// clamp, the list's own `total` only fills a still-unknown count, and at
/// most one count re-fetch happens per page load.
#[derive(Debug)]
pub struct StoreBrowser {
    client: DashboardClient,
    pager: Pager,
}

impl StoreBrowser {
    #[must_use]
    pub fn new(client: DashboardClient, page_size: u32) -> Self {
        Self {
            client,
            pager: Pager::new(page_size),
        }
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Open the storefront at the given page: count first, then the page,
    /// so the requested page can clamp against a known range.
    pub async fn open(&mut self, page: u32) -> Result<Vec<Agent>> {
        self.refresh_count().await;
        self.pager.goto(page);
        self.load_page().await
    }

    /// Navigate to another page. Only the page is fetched; the count never
    /// refreshes as a primary step once known.
    pub async fn goto(&mut self, page: u32) -> Result<Vec<Agent>> {
        self.pager.goto(page);
        self.load_page().await
    }

    pub async fn next(&mut self) -> Result<Vec<Agent>> {
        self.pager.next();
        self.load_page().await
    }

    pub async fn prev(&mut self) -> Result<Vec<Agent>> {
        self.pager.prev();
        self.load_page().await
    }

    /// Fetch the current page and reconcile the total.
    async fn load_page(&mut self) -> Result<Vec<Agent>> {
        let page = self
            .client
            .agents_page(self.pager.current_page(), self.pager.page_size())
            .await?;

        if !self.pager.has_count()
            && let Some(total) = page.total.as_ref().and_then(extract_positive)
        {
            self.pager.record_count(total);
        }
        if !self.pager.has_count() {
            // One retry for data completeness, not for failure: the count
            // endpoint may simply not have resolved on the first attempt.
            self.refresh_count().await;
        }

        Ok(page.agents)
    }

    /// Best-effort count fetch. Failures and unusable bodies leave the
    /// previous total in place; browsing must survive a broken count
    /// endpoint.
    async fn refresh_count(&mut self) {
        match self.client.agent_count().await {
            Ok(body) => {
                if let Some(count) = extract_count(&body) {
                    self.pager.record_count(count);
                } else {
                    debug!(body = %body, "count response had no usable value");
                }
            }
            Err(e) => debug!(error = %e, "count fetch failed"),
        }
    }
}
