use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use inoreader_cli::{
    Res,
    cli::{self, StreamView, TagKind},
    config, error,
    inoreader::{
        stream::{Order, StreamQuery},
        subscriptions::SubscriptionEdit,
        tags::ItemMark,
    },
    utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = "inoreader",
  bin_name = "inoreader",
  author = env!("CARGO_PKG_AUTHORS"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to Inoreader and store the access token
    Login {
        /// Print the login URL instead of opening a browser
        #[clap(long)]
        no_browser: bool,
    },

    /// List subscriptions, tags or stream items
    #[command(subcommand, alias = "ls")]
    List(ListCommand),

    /// Mark a single item as read, unread, starred or unstarred
    #[command(alias = "mark")]
    MarkItem(MarkItemOptions),

    /// Mark every item of a stream as read
    MarkStreamRead {
        /// Feed URL or stream id
        stream: String,
    },

    /// Manage subscriptions
    #[command(subcommand, alias = "sub")]
    Subscription(SubscriptionCommand),

    /// Manage tags
    #[command(subcommand)]
    Tags(TagsCommand),

    /// Show details of the logged-in account
    UserInfo,

    /// Show usage examples
    #[command(alias = "ex")]
    Examples,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListCommand {
    /// List subscriptions with their unread counts
    #[command(alias = "subs")]
    Subscriptions(UnreadFilter),

    /// List tags and folders
    Tags {
        #[command(flatten)]
        filter: UnreadFilter,

        /// Only show one kind of label
        #[clap(long = "type", value_enum)]
        kind: Option<TagKind>,
    },

    /// List the items of a feed
    Stream {
        /// Feed URL or stream id
        url: String,

        #[command(flatten)]
        opts: StreamOptions,
    },

    /// List starred items
    #[command(alias = "star")]
    Starred(StreamOptions),

    /// List saved web pages
    #[command(alias = "wp")]
    WebPages(StreamOptions),
}

#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct UnreadFilter {
    /// Show everything (default)
    #[clap(long)]
    all: bool,

    /// Only show entries with unread items
    #[clap(long)]
    unread: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum OrderArg {
    #[default]
    Newest,
    Oldest,
}

#[derive(Args, Debug, Clone)]
pub struct StreamOptions {
    /// Number of items to return
    #[clap(short = 'n', long = "count")]
    count: Option<u32>,

    /// Sort order
    #[clap(short = 'r', long = "order", value_enum, default_value_t = OrderArg::Newest)]
    order: OrderArg,

    /// Skip items carrying this tag, e.g. user/-/state/com.google/read
    #[clap(long)]
    exclude_target: Option<String>,

    /// Only return items carrying this tag
    #[clap(long)]
    include_target: Option<String>,

    /// Show item URLs
    #[clap(long, group = "view")]
    urls: bool,

    /// Show item ids
    #[clap(long, group = "view")]
    ids: bool,

    /// Show publication dates (default)
    #[clap(long, group = "view")]
    dates: bool,
}

impl StreamOptions {
    fn query(&self, stream_id: String) -> StreamQuery {
        StreamQuery {
            stream_id,
            count: self.count,
            order: match self.order {
                OrderArg::Newest => Order::Newest,
                OrderArg::Oldest => Order::Oldest,
            },
            exclude_target: self.exclude_target.clone(),
            include_target: self.include_target.clone(),
        }
    }

    fn view(&self) -> StreamView {
        if self.urls {
            StreamView::Urls
        } else if self.ids {
            StreamView::Ids
        } else {
            StreamView::Dates
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct MarkItemOptions {
    /// Id of the item to change
    #[clap(long)]
    item_id: String,

    #[command(flatten)]
    mark: MarkFlags,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MarkFlags {
    #[clap(long)]
    read: bool,

    #[clap(long)]
    unread: bool,

    #[clap(long)]
    star: bool,

    #[clap(long)]
    unstar: bool,
}

impl MarkFlags {
    fn mark(&self) -> ItemMark {
        if self.read {
            ItemMark::Read
        } else if self.unread {
            ItemMark::Unread
        } else if self.star {
            ItemMark::Star
        } else {
            ItemMark::Unstar
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubscriptionCommand {
    /// Subscribe to a feed
    Add { url: String },

    /// Unsubscribe from a feed
    #[command(alias = "un")]
    Unsubscribe { url: String },

    /// Rename a feed
    #[command(alias = "st")]
    SetTitle {
        url: String,
        #[clap(long)]
        title: String,
    },

    /// Put a feed into a folder
    #[command(alias = "af")]
    AddToFolder {
        url: String,
        #[clap(long)]
        folder: String,
    },

    /// Take a feed out of a folder
    #[command(alias = "rf")]
    RemoveFromFolder {
        url: String,
        #[clap(long)]
        folder: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TagsCommand {
    /// Rename a tag
    #[command(alias = "mv")]
    Rename {
        #[clap(long)]
        src: String,
        #[clap(long)]
        dest: String,
    },

    /// Delete a tag
    #[command(alias = "rm")]
    Delete { tag: String },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if e.is_config() {
            warning!(
                "The credential file needs the client_id and client_secret of an app registered at https://www.inoreader.com/all_articles#preferences-developer"
            );
        }
        error!("{}", e);
    }
}

async fn run(cli: Cli) -> Res<()> {
    match cli.command {
        Command::Login { no_browser } => cli::login(!no_browser).await,

        Command::List(list) => match list {
            ListCommand::Subscriptions(filter) => cli::list_subscriptions(filter.unread).await,
            ListCommand::Tags { filter, kind } => cli::list_tags(filter.unread, kind).await,
            ListCommand::Stream { url, opts } => {
                cli::list_stream(opts.query(utils::feed_stream_id(&url)), opts.view()).await
            }
            ListCommand::Starred(opts) => {
                cli::list_stream(opts.query(utils::STATE_STARRED.to_string()), opts.view()).await
            }
            ListCommand::WebPages(opts) => {
                let query = opts.query(utils::STATE_SAVED_WEB_PAGES.to_string());
                cli::list_stream(query, opts.view()).await
            }
        },

        Command::MarkItem(opts) => cli::mark_item(&opts.item_id, opts.mark.mark()).await,
        Command::MarkStreamRead { stream } => cli::mark_stream_read(&stream).await,

        Command::Subscription(sub) => match sub {
            SubscriptionCommand::Add { url } => cli::add_subscription(&url).await,
            SubscriptionCommand::Unsubscribe { url } => {
                cli::edit_subscription(&url, SubscriptionEdit::Unsubscribe).await
            }
            SubscriptionCommand::SetTitle { url, title } => {
                cli::edit_subscription(&url, SubscriptionEdit::SetTitle(title)).await
            }
            SubscriptionCommand::AddToFolder { url, folder } => {
                cli::edit_subscription(&url, SubscriptionEdit::AddToFolder(folder)).await
            }
            SubscriptionCommand::RemoveFromFolder { url, folder } => {
                cli::edit_subscription(&url, SubscriptionEdit::RemoveFromFolder(folder)).await
            }
        },

        Command::Tags(tags) => match tags {
            TagsCommand::Rename { src, dest } => cli::rename_tag(&src, &dest).await,
            TagsCommand::Delete { tag } => cli::delete_tag(&tag).await,
        },

        Command::UserInfo => cli::user_info().await,

        Command::Examples => {
            cli::examples();
            Ok(())
        }

        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["inoreader"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_aliases() {
        assert!(matches!(parse(&["ex"]), Command::Examples));
        assert!(matches!(
            parse(&["ls", "subs", "--unread"]),
            Command::List(ListCommand::Subscriptions(UnreadFilter { unread: true, .. }))
        ));
        assert!(matches!(
            parse(&["mark", "--item-id", "42", "--star"]),
            Command::MarkItem(MarkItemOptions { ref item_id, .. }) if item_id == "42"
        ));

        let feed = "https://lwn.net/headlines/rss";
        assert!(matches!(
            parse(&["sub", "un", feed]),
            Command::Subscription(SubscriptionCommand::Unsubscribe { .. })
        ));
        assert!(matches!(
            parse(&["sub", "st", feed, "--title", "LWN"]),
            Command::Subscription(SubscriptionCommand::SetTitle { ref title, .. }) if title == "LWN"
        ));
        assert!(matches!(
            parse(&["sub", "af", feed, "--folder", "Linux"]),
            Command::Subscription(SubscriptionCommand::AddToFolder { .. })
        ));
        assert!(matches!(
            parse(&["sub", "rf", feed, "--folder", "Linux"]),
            Command::Subscription(SubscriptionCommand::RemoveFromFolder { .. })
        ));
        assert!(matches!(
            parse(&["tags", "mv", "--src", "a", "--dest", "b"]),
            Command::Tags(TagsCommand::Rename { .. })
        ));
        assert!(matches!(
            parse(&["tags", "rm", "old-news"]),
            Command::Tags(TagsCommand::Delete { ref tag }) if tag == "old-news"
        ));
    }

    #[test]
    fn test_mark_item_needs_exactly_one_mark() {
        let base = ["inoreader", "mark-item", "--item-id", "42"];
        assert!(Cli::try_parse_from(base).is_err());
        assert!(Cli::try_parse_from([&base[..], &["--read", "--star"]].concat()).is_err());
        assert!(Cli::try_parse_from([&base[..], &["--unread"]].concat()).is_ok());
    }

    #[test]
    fn test_stream_view_flags_conflict() {
        assert!(
            Cli::try_parse_from(["inoreader", "list", "starred", "--urls", "--ids"]).is_err()
        );
        match parse(&["list", "wp", "--ids", "-n", "5", "-r", "oldest"]) {
            Command::List(ListCommand::WebPages(opts)) => {
                assert_eq!(opts.view(), StreamView::Ids);
                let query = opts.query(utils::STATE_SAVED_WEB_PAGES.to_string());
                assert_eq!(query.count, Some(5));
                assert_eq!(query.order, Order::Oldest);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
