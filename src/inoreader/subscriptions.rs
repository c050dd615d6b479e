use crate::{
    Error, Res,
    inoreader::Session,
    types::{QuickAdd, SubscriptionList, UnreadCounters},
    utils,
};

/// Change applied through the `subscription/edit` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionEdit {
    Unsubscribe,
    SetTitle(String),
    AddToFolder(String),
    RemoveFromFolder(String),
}

impl SubscriptionEdit {
    /// Query parameters for the feed at `url`.
    pub fn params(&self, url: &str) -> Vec<(&'static str, String)> {
        let stream_id = utils::feed_stream_id(url);
        match self {
            SubscriptionEdit::Unsubscribe => vec![("ac", "unsubscribe".into()), ("s", stream_id)],
            SubscriptionEdit::SetTitle(title) => {
                vec![("ac", "edit".into()), ("s", stream_id), ("t", title.clone())]
            }
            SubscriptionEdit::AddToFolder(folder) => vec![
                ("ac", "edit".into()),
                ("s", stream_id),
                ("a", utils::label_id(folder)),
            ],
            SubscriptionEdit::RemoveFromFolder(folder) => vec![
                ("ac", "edit".into()),
                ("s", stream_id),
                ("r", utils::label_id(folder)),
            ],
        }
    }

    fn describe(&self, url: &str) -> String {
        match self {
            SubscriptionEdit::Unsubscribe => format!("Unable to unsubscribe from {url}"),
            SubscriptionEdit::SetTitle(title) => {
                format!("Unable to set title {title} on subscription {url}")
            }
            SubscriptionEdit::AddToFolder(folder) => {
                format!("Unable to add subscription {url} to folder {folder}")
            }
            SubscriptionEdit::RemoveFromFolder(folder) => {
                format!("Unable to remove subscription {url} from folder {folder}")
            }
        }
    }
}

/// Subscribes to the feed at `url`.
///
/// Unlike the other mutating endpoints this one answers with JSON; zero
/// results means Inoreader could not find a feed at that address.
pub async fn quick_add(session: &Session, url: &str) -> Res<QuickAdd> {
    let stream_id = utils::feed_stream_id(url);
    let context = format!("Unable to add subscription {url}");
    let added: QuickAdd = session
        .post_json("subscription/quickadd", &[("quickadd", stream_id.as_str())], &context)
        .await?;

    if added.num_results == 0 {
        return Err(Error::Rejected(format!(
            "{context}. Please check if the URL is correct"
        )));
    }

    Ok(added)
}

pub async fn edit_subscription(session: &Session, url: &str, edit: &SubscriptionEdit) -> Res<()> {
    let params = edit.params(url);
    let query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
    session
        .post("subscription/edit", &query, &edit.describe(url))
        .await
}

pub async fn get_subscription_list(session: &Session) -> Res<SubscriptionList> {
    session
        .get_json("subscription/list", &[], "Could not get subscription list")
        .await
}

pub async fn get_unread_counters(session: &Session) -> Res<UnreadCounters> {
    session
        .get_json("unread-count", &[], "Could not get unread counters")
        .await
}
