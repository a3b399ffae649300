pub mod api;
pub mod ui;

use crate::shared::list::ListEntity;
use contracts::system::users::User;

impl ListEntity for User {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
