use crate::{Res, inoreader::Session, types::StreamContents};

/// Sort order of stream contents. Inoreader returns newest first unless
/// asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Newest,
    Oldest,
}

/// Parameters of a `stream/contents` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamQuery {
    pub stream_id: String,
    pub count: Option<u32>,
    pub order: Order,
    pub exclude_target: Option<String>,
    pub include_target: Option<String>,
}

impl StreamQuery {
    pub fn new(stream_id: impl Into<String>) -> Self {
        StreamQuery {
            stream_id: stream_id.into(),
            ..Default::default()
        }
    }

    /// Query pairs; unset options are left out instead of sent empty.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("s", self.stream_id.clone())];
        if let Some(n) = self.count {
            params.push(("n", n.to_string()));
        }
        if self.order == Order::Oldest {
            params.push(("r", "o".to_string()));
        }
        if let Some(xt) = &self.exclude_target {
            params.push(("xt", xt.clone()));
        }
        if let Some(it) = &self.include_target {
            params.push(("it", it.clone()));
        }
        params
    }
}

pub async fn get_stream_contents(session: &Session, query: &StreamQuery) -> Res<StreamContents> {
    let params = query.params();
    let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let context = format!("Could not get stream contents for {}", query.stream_id);
    session.get_json("stream/contents", &pairs, &context).await
}

pub async fn mark_all_as_read(session: &Session, stream_id: &str) -> Res<()> {
    let context = format!("Could not mark stream as read: {stream_id}");
    session
        .post("mark-all-as-read", &[("s", stream_id)], &context)
        .await
}
