pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::system::roles::Role;

impl ListEntity for Role {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
