use clap::ValueEnum;
use tabled::Table;

use crate::{
    Res,
    inoreader::tags,
    success,
    types::{TagList, TagTableRow},
    utils,
};

/// Which kind of labels to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagKind {
    Tags,
    Folders,
}

impl TagKind {
    fn api_type(self) -> &'static str {
        match self {
            TagKind::Tags => "tag",
            TagKind::Folders => "folder",
        }
    }
}

pub async fn list_tags(only_unread: bool, kind: Option<TagKind>) -> Res<()> {
    let session = super::session().await?;

    let pb = utils::spinner("Fetching tags and folders...");
    let list = tags::get_tag_list(&session).await;
    pb.finish_and_clear();

    println!("{}", Table::new(tag_rows(list?, only_unread, kind)));
    Ok(())
}

/// Tags and folders only; the state streams in the same list are skipped.
pub fn tag_rows(list: TagList, only_unread: bool, kind: Option<TagKind>) -> Vec<TagTableRow> {
    list.tags
        .into_iter()
        .filter(|t| match kind {
            Some(k) => t.kind == k.api_type(),
            None => t.kind == "tag" || t.kind == "folder",
        })
        .filter(|t| !only_unread || t.unread_count > 0)
        .map(|t| TagTableRow {
            name: utils::label_name(&t.id).to_string(),
            kind: t.kind,
            unread: t.unread_count,
        })
        .collect()
}

pub async fn rename_tag(src: &str, dest: &str) -> Res<()> {
    let session = super::session().await?;
    tags::rename_tag(&session, src, dest).await?;
    success!("Renamed {} tag to {}", src, dest);
    Ok(())
}

pub async fn delete_tag(name: &str) -> Res<()> {
    let session = super::session().await?;
    tags::delete_tag(&session, name).await?;
    success!("Deleted {} tag", name);
    Ok(())
}
