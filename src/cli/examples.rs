use colored::Colorize;

const EXAMPLES: &[(&str, &str)] = &[
    ("Log in and store the access token", "inoreader login"),
    ("List all subscriptions", "inoreader list subscriptions"),
    ("List subscriptions with unread items", "inoreader list subs --unread"),
    ("List folders only", "inoreader list tags --type folders"),
    (
        "Show the 10 oldest items of a feed with their ids",
        "inoreader list stream https://blog.rust-lang.org/feed.xml -n 10 -r oldest --ids",
    ),
    (
        "Show unread items of a feed",
        "inoreader list stream https://blog.rust-lang.org/feed.xml --exclude-target user/-/state/com.google/read",
    ),
    ("Show starred items with their urls", "inoreader list starred --urls"),
    ("Show saved web pages", "inoreader list wp"),
    ("Mark an item as read", "inoreader mark-item --item-id <ITEM_ID> --read"),
    ("Star an item", "inoreader mark-item --item-id <ITEM_ID> --star"),
    (
        "Mark a whole feed as read",
        "inoreader mark-stream-read https://blog.rust-lang.org/feed.xml",
    ),
    (
        "Subscribe to a feed",
        "inoreader subscription add https://blog.rust-lang.org/feed.xml",
    ),
    (
        "Move a feed into a folder",
        "inoreader subscription add-to-folder https://blog.rust-lang.org/feed.xml --folder Rust",
    ),
    (
        "Rename a feed",
        "inoreader subscription set-title https://blog.rust-lang.org/feed.xml --title \"Rust Blog\"",
    ),
    ("Rename a tag", "inoreader tags rename --src rust --dest Rust"),
    ("Delete a tag", "inoreader tags delete old-news"),
    ("Show account details", "inoreader user-info"),
    ("Generate zsh completions", "inoreader completions zsh"),
];

pub fn examples() {
    for (description, command) in EXAMPLES {
        println!("{}", description.bold());
        println!("  {}\n", command.cyan());
    }
}
