pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::sales::history::Sale;

impl ListEntity for Sale {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
