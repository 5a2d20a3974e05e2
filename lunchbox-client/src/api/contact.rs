use shared::models::ContactMessage;

use super::Api;
use crate::{ClientResult, HttpClient};

impl<C: HttpClient> Api<C> {
    pub async fn send_contact_message(&self, message: &ContactMessage) -> ClientResult<()> {
        self.http.post("contact", message).await
    }
}
