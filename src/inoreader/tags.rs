use crate::{Res, inoreader::Session, types::TagList, utils};

/// State change applied to a single item through `edit-tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMark {
    Read,
    Unread,
    Star,
    Unstar,
}

impl ItemMark {
    /// `(action, tag)`: `a` adds the state tag, `r` removes it.
    pub fn param(self) -> (&'static str, &'static str) {
        match self {
            ItemMark::Read => ("a", utils::STATE_READ),
            ItemMark::Unread => ("r", utils::STATE_READ),
            ItemMark::Star => ("a", utils::STATE_STARRED),
            ItemMark::Unstar => ("r", utils::STATE_STARRED),
        }
    }
}

/// Lists tags and folders with their unread counts.
pub async fn get_tag_list(session: &Session) -> Res<TagList> {
    session
        .get_json(
            "tag/list",
            &[("types", "1"), ("counts", "1")],
            "Could not get tags list",
        )
        .await
}

pub async fn edit_tag(session: &Session, item_id: &str, mark: ItemMark) -> Res<()> {
    let (action, tag) = mark.param();
    let context = format!("Could not mark item {item_id} ({mark:?})");
    session
        .post("edit-tag", &[(action, tag), ("i", item_id)], &context)
        .await
}

pub async fn rename_tag(session: &Session, src: &str, dest: &str) -> Res<()> {
    let context = format!("Could not rename tag {src} to {dest}");
    let (src_id, dest_id) = (utils::label_id(src), utils::label_id(dest));
    session
        .post(
            "rename-tag",
            &[("s", src_id.as_str()), ("dest", dest_id.as_str())],
            &context,
        )
        .await
}

pub async fn delete_tag(session: &Session, name: &str) -> Res<()> {
    let context = format!("Could not delete tag {name}");
    let tag_id = utils::label_id(name);
    session
        .post("disable-tag", &[("s", tag_id.as_str())], &context)
        .await
}
