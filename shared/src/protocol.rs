//! Protocol-fixed field names and default values for LTI 1.x launches.
//!
//! These are not configurable: they are what every LTI 1.x consumer and
//! OAuth 1.0 server expects to see on the wire.

pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const LTI_VERSION: &str = "lti_version";
pub const LTI_MESSAGE_TYPE: &str = "lti_message_type";

pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";
pub const LTI_VERSION_1P0: &str = "LTI-1p0";
pub const BASIC_LAUNCH_REQUEST: &str = "basic-lti-launch-request";

pub const DEFAULT_METHOD: &str = "POST";
