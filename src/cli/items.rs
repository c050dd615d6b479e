use crate::{
    Res, info,
    inoreader::{
        stream,
        tags::{self, ItemMark},
    },
    success, utils,
};

pub async fn mark_item(item_id: &str, mark: ItemMark) -> Res<()> {
    let session = super::session().await?;
    tags::edit_tag(&session, item_id, mark).await?;

    match mark {
        ItemMark::Read => success!("Marked {} as read", item_id),
        ItemMark::Unread => {
            success!("Attempted to mark {} as unread.", item_id);
            info!(
                "Items older than the first unread item of their feed cannot be marked unread."
            );
        }
        ItemMark::Star => success!("Marked {} as starred", item_id),
        ItemMark::Unstar => success!("Unstarred {}", item_id),
    }
    Ok(())
}

pub async fn mark_stream_read(stream: &str) -> Res<()> {
    let session = super::session().await?;
    let stream_id = utils::feed_stream_id(stream);
    stream::mark_all_as_read(&session, &stream_id).await?;
    success!("Marked {} as read", stream);
    Ok(())
}
