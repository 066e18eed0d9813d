//! Paginated listing of open job requisitions.
//!
//! Pages are requested strictly one after another with `$top=20` and a
//! growing `$skip`, until `$skip` reaches the `meta.totalNumber` reported by
//! the upstream. The result is all-or-nothing: a failed page discards every
//! record collected so far.

use oauth2::AccessToken;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use super::{
    AdpClient,
    model::{Requisition, RequisitionPage},
};
use crate::careers::error::CareersError;

const PAGE_SIZE: u64 = 20;

// Pre-encoded OData filter selecting requisitions in status "ON".
const OPEN_REQUISITIONS_FILTER: &str = "requisitionStatusCode/codeValue%20eq%20ON";

impl AdpClient {
    /// Fetches every open requisition, preserving upstream order.
    pub async fn fetch_open_requisitions(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<Requisition>, CareersError> {
        let mut requisitions = Vec::new();
        let mut skip = 0;

        loop {
            let page = self.fetch_page(token, skip).await?;
            let total = page.meta.as_ref().map_or(0, |meta| meta.total_number);
            let received = page.received();
            requisitions.extend(page.job_requisitions);
            skip += PAGE_SIZE;

            debug!(skip, total, received, "fetched requisition page");

            if skip >= total {
                break;
            }
            if received == 0 {
                warn!(skip, total, "upstream returned an empty page before the reported total");
                break;
            }
        }

        info!(count = requisitions.len(), "fetched open requisitions");
        Ok(requisitions)
    }

    async fn fetch_page(
        &self,
        token: &AccessToken,
        skip: u64,
    ) -> Result<RequisitionPage, CareersError> {
        let url = format!(
            "{}/staffing/v1/job-requisitions?$filter={OPEN_REQUISITIONS_FILTER}&$top={PAGE_SIZE}&$skip={skip}",
            self.base_url
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| {
                warn!(skip, error = %e, "requisition page request failed");
                CareersError::fetch(e.status())
            })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(RequisitionPage::default());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(skip, %status, %body, "requisition listing rejected");
            return Err(CareersError::fetch(Some(status)));
        }

        response.json::<RequisitionPage>().await.map_err(|e| {
            warn!(skip, error = %e, "requisition page was not valid JSON");
            CareersError::fetch(None)
        })
    }
}
