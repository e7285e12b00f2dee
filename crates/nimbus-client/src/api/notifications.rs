use super::*;
use crate::SessionToken;
use crate::api::models::{MarkReadRequest, Notification, PageQuery};

impl ApiClient {
    /// List the current user's notifications in the order the console
    /// returns them (no particular order is guaranteed).
    pub async fn list_notifications(
        &self,
        token: &SessionToken,
        page: Option<PageQuery>,
    ) -> Result<Vec<Notification>, NimbusError> {
        let mut url = self.endpoint("notifications")?;
        if let Some(page) = page {
            url.set_query(Some(&page.to_query()));
        }
        let body = self.authenticated_get(url.as_str(), token).await?;
        let notifications: Vec<Notification> = serde_json::from_str(&body)?;
        Ok(notifications)
    }

    /// Mark a single notification read.
    ///
    /// The response body is not inspected beyond the status code.
    pub async fn mark_read(&self, token: &SessionToken, id: &str) -> Result<(), NimbusError> {
        let url = self.endpoint(&format!("notifications/{id}"))?;
        self.authenticated_post(url.as_str(), token, &MarkReadRequest { read: true })
            .await?;
        Ok(())
    }
}
