//! Customer queries on Repository

use super::Repository;
use crate::{error::AppResult, models::Customer};

impl Repository {
    /// List all customers
    pub async fn customers_list(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY customer_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
