use std::collections::HashMap;

use tabled::Table;

use crate::{
    Res,
    inoreader::subscriptions::{self, SubscriptionEdit},
    success,
    types::{SubscriptionList, SubscriptionTableRow, UnreadCounters},
    utils,
};

pub async fn list_subscriptions(only_unread: bool) -> Res<()> {
    let session = super::session().await?;

    let pb = utils::spinner("Fetching subscriptions...");
    let fetched = async {
        let list = subscriptions::get_subscription_list(&session).await?;
        let counters = subscriptions::get_unread_counters(&session).await?;
        Ok::<_, crate::Error>((list, counters))
    }
    .await;
    pb.finish_and_clear();

    let (list, counters) = fetched?;
    println!("{}", Table::new(subscription_rows(list, &counters, only_unread)));
    Ok(())
}

/// Joins subscriptions with their unread counters, sorted by title.
pub fn subscription_rows(
    list: SubscriptionList,
    counters: &UnreadCounters,
    only_unread: bool,
) -> Vec<SubscriptionTableRow> {
    let unread: HashMap<&str, u64> = counters
        .unreadcounts
        .iter()
        .map(|c| (c.id.as_str(), c.count))
        .collect();

    let mut rows: Vec<SubscriptionTableRow> = list
        .subscriptions
        .into_iter()
        .map(|s| SubscriptionTableRow {
            unread: unread.get(s.id.as_str()).copied().unwrap_or(0),
            folders: s
                .categories
                .iter()
                .map(|c| {
                    if c.label.is_empty() {
                        utils::label_name(&c.id).to_string()
                    } else {
                        c.label.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            title: s.title,
            url: s.url,
        })
        .filter(|row| !only_unread || row.unread > 0)
        .collect();

    rows.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    rows
}

pub async fn add_subscription(url: &str) -> Res<()> {
    let session = super::session().await?;
    let added = subscriptions::quick_add(&session, url).await?;

    if added.stream_name.is_empty() {
        success!("{} added to Inoreader", url);
    } else {
        success!("{} ({}) added to Inoreader", added.stream_name, url);
    }
    Ok(())
}

pub async fn edit_subscription(url: &str, edit: SubscriptionEdit) -> Res<()> {
    let session = super::session().await?;
    subscriptions::edit_subscription(&session, url, &edit).await?;

    match edit {
        SubscriptionEdit::Unsubscribe => success!("{} removed from Inoreader", url),
        SubscriptionEdit::SetTitle(title) => success!("Changed title of feed to: {}", title),
        SubscriptionEdit::AddToFolder(folder) => success!("Added {} to {}", url, folder),
        SubscriptionEdit::RemoveFromFolder(folder) => {
            success!("Removed {} from {}", url, folder)
        }
    }
    Ok(())
}
