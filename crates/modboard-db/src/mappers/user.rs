//! User model -> entity mapper

use modboard_core::entities::User;
use modboard_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.user_id),
            username: model.username,
            discriminator: model.discriminator,
            avatar: model.avatar,
            bot: model.bot,
            admin: model.admin,
            created_at: model.created_at,
        }
    }
}
