// -- Endpoint --

pub const BASE_URL: &str = "https://wirepusher.com/send";

// -- Message types --

/// Type used when the caller doesn't pick one. Types are configured in the
/// app on the phone; "Default" always exists.
pub const DEFAULT_TYPE: &str = "Default";

/// Removes a single notification, selected by `message_id`.
pub const CLEAR_SINGLE_MESSAGE: &str = "wirepusher_clear_notification";

/// Removes every notification sent to the device.
pub const CLEAR_ALL_MESSAGES: &str = "wirepusher_clear_all_notifications";

// -- Query parameters, in the order the relay receives them --

pub const PARAM_ID: &str = "id";
pub const PARAM_TITLE: &str = "title";
pub const PARAM_MESSAGE: &str = "message";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_IV: &str = "iv";
pub const PARAM_MESSAGE_ID: &str = "message_id";
pub const PARAM_ACTION: &str = "action";
pub const PARAM_IMAGE_URL: &str = "image_url";
