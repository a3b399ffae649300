pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::catalog::suppliers::Supplier;

impl ListEntity for Supplier {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
