pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::org::branches::Branch;

impl ListEntity for Branch {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
