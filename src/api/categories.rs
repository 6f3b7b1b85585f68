//! Transaction categories.

use crate::{
    entities::Category,
    errors::Result,
    http::{ApiClient, Transport},
};

/// All transaction categories.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Category>> {
    client.get_list("categories/").await
}
