use shared::Paginated;
use shared::models::{MenuItem, RawMenuItem, Restaurant, RestaurantFilter, normalize_menu};

use super::{Api, segment};
use crate::{ClientError, ClientResult, HttpClient};

const RESTAURANTS: &str = "restaurant/consumer/restaurants";

impl<C: HttpClient> Api<C> {
    // ========== Restaurant API ==========

    /// Search restaurants. Blank filters are dropped before sending.
    pub async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> ClientResult<Paginated<Restaurant>> {
        let filter = filter.clone().cleaned();
        self.http.get_with_query(RESTAURANTS, &filter).await
    }

    pub async fn get_restaurant(&self, id: &str) -> ClientResult<Restaurant> {
        self.http
            .get(&format!("{RESTAURANTS}/{}", segment(id)))
            .await
    }

    /// Fetch a restaurant's menu, normalised into strict menu items
    pub async fn get_menu(&self, restaurant_id: &str) -> ClientResult<Vec<MenuItem>> {
        let raw: Vec<RawMenuItem> = self
            .http
            .get(&format!("{RESTAURANTS}/{}/menu", segment(restaurant_id)))
            .await?;
        normalize_menu(raw).map_err(|e| {
            tracing::warn!(restaurant_id, error = %e, "menu failed normalisation");
            ClientError::InvalidResponse(e.to_string())
        })
    }
}
