use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use wirepusher_types::Message;
use wirepusher_types::api::{BASE_URL, DEFAULT_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Send a notification
    Send,
    /// Clear one message (with --msgid) or all messages
    Clear,
}

/// Send WirePusher notifications, optionally end-to-end encrypted.
#[derive(Debug, Parser)]
#[command(name = "wirepusher", version)]
pub struct Args {
    /// Name of user to send message to
    #[arg(long)]
    pub user: String,

    /// Defined type in the app on the mobile phone under 'Types'
    #[arg(long = "type", default_value = DEFAULT_TYPE)]
    pub msg_type: String,

    /// Title of message that will be shown in the notification drawer
    #[arg(long, default_value = "")]
    pub title: String,

    /// Body or content of the notification
    #[arg(long = "msg", default_value = "")]
    pub body: String,

    /// Message id; lets a later message overwrite or clear this one
    #[arg(long, default_value_t = 0)]
    pub msgid: i64,

    /// URI opened when the notification is tapped
    #[arg(long = "url", default_value = "")]
    pub action_url: String,

    /// URI of an image displayed in the notification
    #[arg(long = "image", default_value = "")]
    pub image_url: String,

    /// What kind of request to make
    #[arg(long, value_enum, ignore_case = true, default_value_t = Action::Send)]
    pub action: Action,

    /// JSON file listing users, device ids and passwords
    #[arg(long, env = "WIREPUSHER_USERS", default_value = "users.json")]
    pub users: PathBuf,

    /// Relay endpoint
    #[arg(long, env = "WIREPUSHER_ENDPOINT", default_value = BASE_URL)]
    pub endpoint: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "WIREPUSHER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn message(&self) -> Message {
        let msg = if self.msgid == 0 {
            Message::new(&self.msg_type, &self.title, &self.body)
        } else {
            Message::with_id(self.msgid, &self.msg_type, &self.title, &self.body)
        };
        msg.with_action_url(self.action_url.as_str())
            .with_image_url(self.image_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wirepusher", "--user", "user001"]).unwrap();
        assert_eq!(args.action, Action::Send);
        assert_eq!(args.msg_type, "Default");
        assert_eq!(args.msgid, 0);

        let msg = args.message();
        assert!(!msg.has_id());
        assert!(msg.action_url.is_empty());
        assert!(msg.image_url.is_empty());
    }

    #[test]
    fn action_is_case_insensitive() {
        let args =
            Args::try_parse_from(["wirepusher", "--user", "u", "--action", "CLEAR"]).unwrap();
        assert_eq!(args.action, Action::Clear);
    }

    #[test]
    fn full_message() {
        let args = Args::try_parse_from([
            "wirepusher",
            "--user",
            "user001",
            "--type",
            "Alert",
            "--title",
            "Hi",
            "--msg",
            "Body",
            "--msgid",
            "5",
            "--url",
            "https://example.com",
            "--image",
            "https://example.com/a.png",
        ])
        .unwrap();

        let msg = args.message();
        assert_eq!(msg.id, 5);
        assert_eq!(msg.msg_type, "Alert");
        assert_eq!(msg.title, "Hi");
        assert_eq!(msg.body, "Body");
        assert_eq!(msg.action_url, "https://example.com");
        assert_eq!(msg.image_url, "https://example.com/a.png");
    }

    #[test]
    fn user_is_required() {
        assert!(Args::try_parse_from(["wirepusher"]).is_err());
    }
}
