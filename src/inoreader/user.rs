use crate::{Res, inoreader::Session, types::UserInfo};

/// Retrieves the profile of the authenticated user.
pub async fn get_user_info(session: &Session) -> Res<UserInfo> {
    session
        .get_json("user-info", &[], "Could not get user info")
        .await
}
