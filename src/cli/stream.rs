use chrono::{Local, TimeZone};
use tabled::Table;

use crate::{
    Res,
    inoreader::stream::{self, StreamQuery},
    types::{
        StreamContents, StreamDateRow, StreamIdRow, StreamUrlRow, WebPageIdRow, WebPageUrlRow,
    },
    utils,
};

/// Third column of a stream listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamView {
    Urls,
    Ids,
    #[default]
    Dates,
}

pub async fn list_stream(query: StreamQuery, view: StreamView) -> Res<()> {
    let session = super::session().await?;
    let web_pages = query.stream_id == utils::STATE_SAVED_WEB_PAGES;

    let pb = utils::spinner("Fetching stream contents...");
    let contents = stream::get_stream_contents(&session, &query).await;
    pb.finish_and_clear();

    println!("{}", render_stream(&contents?, view, web_pages, &Local));
    Ok(())
}

/// Renders stream items as a table. Saved web pages have no feed, so their
/// URL and ID views leave the column out.
pub fn render_stream<Tz>(contents: &StreamContents, view: StreamView, web_pages: bool, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let items = contents.items.iter();

    let table = match (view, web_pages) {
        (StreamView::Urls, false) => Table::new(items.map(|i| StreamUrlRow {
            feed: i.feed_title().to_string(),
            title: i.title.clone(),
            url: i.url().to_string(),
        })),
        (StreamView::Urls, true) => Table::new(items.map(|i| WebPageUrlRow {
            title: i.title.clone(),
            url: i.url().to_string(),
        })),
        (StreamView::Ids, false) => Table::new(items.map(|i| StreamIdRow {
            feed: i.feed_title().to_string(),
            title: i.title.clone(),
            item_id: i.id.clone(),
        })),
        (StreamView::Ids, true) => Table::new(items.map(|i| WebPageIdRow {
            title: i.title.clone(),
            item_id: i.id.clone(),
        })),
        (StreamView::Dates, _) => Table::new(items.map(|i| StreamDateRow {
            feed: i.feed_title().to_string(),
            title: i.title.clone(),
            date: utils::format_timestamp(i.published, tz),
        })),
    };

    table.to_string()
}
