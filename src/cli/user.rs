use chrono::Local;
use tabled::Table;

use crate::{
    Res,
    inoreader::user,
    types::{KeyValueRow, UserInfo},
    utils,
};

pub async fn user_info() -> Res<()> {
    let session = super::session().await?;

    let pb = utils::spinner("Fetching user info...");
    let info = user::get_user_info(&session).await;
    pb.finish_and_clear();

    println!("{}", Table::new(user_info_rows(&info?)));
    Ok(())
}

fn user_info_rows(info: &UserInfo) -> Vec<KeyValueRow> {
    [
        ("User ID", info.user_id.clone()),
        ("Username", info.user_name.clone()),
        ("Profile ID", info.user_profile_id.clone()),
        ("Email", info.user_email.clone()),
        ("Blogger User", info.is_blogger_user.to_string()),
        (
            "Sign-up Date",
            utils::format_timestamp(info.signup_time_sec, &Local),
        ),
    ]
    .into_iter()
    .map(|(key, value)| KeyValueRow {
        key: key.to_string(),
        value,
    })
    .collect()
}
