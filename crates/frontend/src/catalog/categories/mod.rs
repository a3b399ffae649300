pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::catalog::categories::Category;

impl ListEntity for Category {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
