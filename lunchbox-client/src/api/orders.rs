use shared::models::{CreateOrderRequest, Order, OrderFilter, RejectOrderRequest};
use shared::{PageQuery, Paginated};

use super::{Api, segment};
use crate::{ClientResult, HttpClient};

const ORDERS: &str = "corporate-orders";

impl<C: HttpClient> Api<C> {
    // ========== Corporate Order API ==========

    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        self.http.post(ORDERS, request).await
    }

    pub async fn my_orders(&self, filter: &OrderFilter) -> ClientResult<Paginated<Order>> {
        self.http
            .get_with_query(&format!("{ORDERS}/my-orders"), filter)
            .await
    }

    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        self.http.get(&format!("{ORDERS}/{}", segment(id))).await
    }

    /// Orders waiting for the current manager's approval
    pub async fn pending_approvals(&self, page: &PageQuery) -> ClientResult<Paginated<Order>> {
        self.http
            .get_with_query(&format!("{ORDERS}/pending-approvals"), page)
            .await
    }

    pub async fn approve_order(&self, id: &str) -> ClientResult<Order> {
        self.http
            .post_empty(&format!("{ORDERS}/{}/approve", segment(id)))
            .await
    }

    pub async fn reject_order(&self, id: &str, reason: &str) -> ClientResult<Order> {
        let body = RejectOrderRequest {
            reason: reason.to_string(),
        };
        self.http
            .post(&format!("{ORDERS}/{}/reject", segment(id)), &body)
            .await
    }

    pub async fn cancel_order(&self, id: &str) -> ClientResult<Order> {
        self.http
            .post_empty(&format!("{ORDERS}/{}/cancel", segment(id)))
            .await
    }
}
