//! Domain methods for the mediary API client.
//!
//! Media endpoints return heterogeneous record arrays; responses are run
//! through `mediary_core::classify` once the body is fully decoded, and
//! handed back as `ClassifiedBatch`/`ClassifiedRecord`. Member relation
//! methods mirror the members endpoints (follow, block, requests).

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;

use mediary_core::classify::{bucket_by_kind, ClassifiedRecord, MediaKind};
use mediary_core::models::{
    BlockRequest, FollowRequest, FollowRequestIn, FollowRequestKind, FollowRequestsGroup,
    FollowResponse, Member,
};

use crate::{ApiClient, Envelope};

/// A media response batch: raw records zipped with their classified kinds,
/// in response order.
#[derive(Debug, Clone)]
pub struct ClassifiedBatch {
    pub records: Vec<ClassifiedRecord>,
}

impl ClassifiedBatch {
    pub fn from_records(records: Vec<Value>) -> Self {
        Self {
            records: records.into_iter().map(ClassifiedRecord::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The kind list, index-aligned with the response.
    pub fn kinds(&self) -> Vec<MediaKind> {
        self.records.iter().map(|r| r.kind).collect()
    }

    /// Regroup the batch as a kind -> records map for per-kind display lists.
    pub fn into_buckets(self) -> BTreeMap<MediaKind, Vec<Value>> {
        bucket_by_kind(self.records.into_iter().map(|r| r.record).collect())
    }
}

/// Search API response (query, results, count). Matches API handler shape.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub results: Vec<Value>,
    pub count: usize,
}

/// Follow-requests response: grouped for `all`, flat for `sent`/`received`.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum FollowRequestList {
    Grouped(FollowRequestsGroup),
    Flat(Vec<FollowRequestIn>),
}

impl ApiClient {
    /// Fetch a batch of random media and classify each record.
    pub async fn random_media(&self) -> Result<ClassifiedBatch> {
        let envelope: Envelope<Vec<Value>> = self.get("/api/media/random/", &[]).await?;
        Ok(ClassifiedBatch::from_records(envelope.data))
    }

    /// Fetch a single media record by id, classified.
    pub async fn media_by_id(&self, media_id: Uuid) -> Result<ClassifiedRecord> {
        let envelope: Envelope<Value> = self
            .get(&format!("/api/media/{}", media_id), &[])
            .await?;
        Ok(ClassifiedRecord::new(envelope.data))
    }

    /// Full-text catalog search.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<SearchResponse> {
        let mut query_params = vec![("q", urlencoding::encode(query).to_string())];
        if let Some(l) = limit {
            query_params.push(("limit", l.to_string()));
        }
        self.get("/api/search", &query_params).await
    }

    /// Look up a member profile by name or webfinger.
    pub async fn member_info(&self, name: &str) -> Result<Member> {
        let envelope: Envelope<Member> = self
            .get(&format!("/api/members/{}/info", urlencoding::encode(name)), &[])
            .await?;
        Ok(envelope.data)
    }

    /// Send a follow request.
    pub async fn follow(&self, request: &FollowRequest) -> Result<FollowResponse> {
        let envelope: Envelope<FollowResponse> =
            self.post_json("/api/members/follow", request).await?;
        Ok(envelope.data)
    }

    /// Unfollow; target travels in the DELETE body.
    pub async fn unfollow(&self, target: &str) -> Result<FollowResponse> {
        let body = serde_json::json!({ "target": target });
        let envelope: Envelope<FollowResponse> =
            self.delete_json("/api/members/follow", &body).await?;
        Ok(envelope.data)
    }

    /// Current relation toward a member.
    pub async fn follow_status(&self, followee_webfinger: &str) -> Result<FollowResponse> {
        let envelope: Envelope<FollowResponse> = self
            .get(
                &format!(
                    "/api/members/follow/status/{}",
                    urlencoding::encode(followee_webfinger)
                ),
                &[],
            )
            .await?;
        Ok(envelope.data)
    }

    /// List pending follow requests (sent, received, or both).
    pub async fn follow_requests(&self, kind: FollowRequestKind) -> Result<FollowRequestList> {
        let envelope: Envelope<FollowRequestList> = self
            .get(&format!("/api/members/follow/requests/{}", kind), &[])
            .await?;
        Ok(envelope.data)
    }

    /// Accept an incoming follow request.
    pub async fn accept_follow_request(&self, id: i64) -> Result<()> {
        let _: Value = self
            .put_json(
                &format!("/api/members/follow/requests/in/{}", id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    /// Reject an incoming follow request.
    pub async fn reject_follow_request(&self, id: i64) -> Result<()> {
        self.delete::<Value>(&format!("/api/members/follow/requests/in/{}", id), None)
            .await
    }

    /// Cancel a follow request we sent.
    pub async fn cancel_follow_request(&self, id: i64) -> Result<()> {
        self.delete::<Value>(&format!("/api/members/follow/requests/out/{}", id), None)
            .await
    }

    /// Block a member.
    pub async fn block(&self, blocker: &str, blockee: &str) -> Result<()> {
        let body = BlockRequest {
            blocker: blocker.to_string(),
            blockee: blockee.to_string(),
        };
        let _: Value = self.post_json("/api/members/block", &body).await?;
        Ok(())
    }

    /// Lift a block.
    pub async fn unblock(&self, blocker: &str, blockee: &str) -> Result<()> {
        let body = BlockRequest {
            blocker: blocker.to_string(),
            blockee: blockee.to_string(),
        };
        let _: Value = self.post_json("/api/members/unblock", &body).await?;
        Ok(())
    }

    /// Members the viewer follows.
    pub async fn list_followees(&self, viewer: &str) -> Result<Vec<Member>> {
        let envelope: Envelope<Vec<Member>> = self
            .get("/api/members/followees", &[("viewer", viewer.to_string())])
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_kinds_align_with_response_order() {
        let batch = ClassifiedBatch::from_records(vec![
            json!({"kind": "tvshow"}),
            json!({"media_id": "a", "album_artists": []}),
        ]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.kinds(), vec![MediaKind::TvShow, MediaKind::Album]);
    }

    #[test]
    fn batch_buckets_regroup_without_loss() {
        let batch = ClassifiedBatch::from_records(vec![
            json!({"kind": "film", "title": "a"}),
            json!({"kind": "film", "title": "b"}),
            json!({"nope": true}),
        ]);
        let buckets = batch.into_buckets();
        assert_eq!(buckets[&MediaKind::Film].len(), 2);
        assert_eq!(buckets[&MediaKind::Unknown].len(), 1);
    }

    #[test]
    fn follow_request_list_decodes_both_shapes() {
        let flat = json!([{"id": 1, "requester": "a@b", "created": "2024-01-01T00:00:00Z"}]);
        assert!(matches!(
            serde_json::from_value::<FollowRequestList>(flat).unwrap(),
            FollowRequestList::Flat(ref v) if v.len() == 1
        ));

        let grouped = json!({"sent": [], "received": [
            {"id": 2, "requester": "c@d", "created": "2024-01-01T00:00:00Z"}
        ]});
        assert!(matches!(
            serde_json::from_value::<FollowRequestList>(grouped).unwrap(),
            FollowRequestList::Grouped(ref g) if g.received.len() == 1
        ));
    }

    #[test]
    fn empty_random_batch_is_valid() {
        let batch = ClassifiedBatch::from_records(Vec::new());
        assert!(batch.is_empty());
        assert!(batch.kinds().is_empty());
    }
}
