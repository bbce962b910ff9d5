use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use uuid::Uuid;

/// Member profile as served by the members endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub uuid: Uuid,
    #[serde(rename = "memberName")]
    pub member_name: String,
    /// Federation handle, e.g. `user@instance.example`.
    pub webfinger: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    /// Registration time as a unix timestamp.
    pub regdate: i64,
    #[serde(default)]
    pub roles: Vec<String>,
    pub visibility: Visibility,
    #[serde(default)]
    pub followers_uri: Option<String>,
    #[serde(default)]
    pub following_uri: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    FollowersOnly,
    Private,
}

/// Outbound follow request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRequest {
    /// Webfinger of the member to follow.
    pub target: String,
    pub reblogs: bool,
    pub notify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowStatus {
    Accepted,
    Pending,
    Failed,
    NotFound,
    AlreadyFollowing,
    Blocked,
}

impl Display for FollowStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FollowStatus::Accepted => write!(f, "accepted"),
            FollowStatus::Pending => write!(f, "pending"),
            FollowStatus::Failed => write!(f, "failed"),
            FollowStatus::NotFound => write!(f, "not_found"),
            FollowStatus::AlreadyFollowing => write!(f, "already_following"),
            FollowStatus::Blocked => write!(f, "blocked"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub id: i64,
    pub status: FollowStatus,
    #[serde(default)]
    pub reblogs: bool,
    #[serde(default)]
    pub notify: bool,
    #[serde(rename = "acceptTime", default)]
    pub accept_time: Option<DateTime<Utc>>,
}

/// A pending follow request as listed by the requests endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRequestIn {
    pub id: i64,
    pub requester: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowRequestsGroup {
    #[serde(default)]
    pub sent: Vec<FollowRequestIn>,
    #[serde(default)]
    pub received: Vec<FollowRequestIn>,
}

/// Which follow-request list to fetch. Rendered into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowRequestKind {
    Sent,
    Received,
    All,
}

impl Display for FollowRequestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FollowRequestKind::Sent => write!(f, "sent"),
            FollowRequestKind::Received => write!(f, "received"),
            FollowRequestKind::All => write!(f, "all"),
        }
    }
}

impl FromStr for FollowRequestKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sent" => Ok(FollowRequestKind::Sent),
            "received" => Ok(FollowRequestKind::Received),
            "all" => Ok(FollowRequestKind::All),
            _ => Err(anyhow::anyhow!("Invalid follow request kind: {}", s)),
        }
    }
}

/// Block/unblock request body; both sides are webfinger handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRequest {
    pub blocker: String,
    pub blockee: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn follow_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(FollowStatus::AlreadyFollowing).unwrap(),
            json!("already_following")
        );
        assert_eq!(FollowStatus::NotFound.to_string(), "not_found");
    }

    #[test]
    fn follow_response_tolerates_missing_accept_time() {
        let value = json!({"id": 9, "status": "pending"});
        let resp: FollowResponse = serde_json::from_value(value).unwrap();
        assert_eq!(resp.status, FollowStatus::Pending);
        assert!(resp.accept_time.is_none());
        assert!(!resp.notify);
    }

    #[test]
    fn follow_request_kind_parses() {
        assert_eq!(
            "ALL".parse::<FollowRequestKind>().unwrap(),
            FollowRequestKind::All
        );
        assert!("inbound".parse::<FollowRequestKind>().is_err());
        assert_eq!(FollowRequestKind::Sent.to_string(), "sent");
    }
}
