//! Bucket notification resources: `CephBucketTopic` and `CephBucketNotification`

use k8s_openapi::api::core::v1::SecretKeySelector;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::Status;

/// `BucketTopicSpec` represent the spec of a Bucket Topic
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephBucketTopic",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephbuckettopics"
)]
#[kube(namespaced, status = "BucketTopicStatus")]
pub struct CephBucketTopicSpec {
    /// The name of the object store on which to define the topic
    #[schemars(length(min = 1))]
    pub object_store_name: String,
    /// The namespace of the object store on which to define the topic
    #[schemars(length(min = 1))]
    pub object_store_namespace: String,
    /// Data which is sent in each event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opaque_data: Option<String>,
    /// Indication whether notifications to this endpoint are persistent or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,
    /// Contains the endpoint spec of the topic
    pub endpoint: TopicEndpointSpec,
}

/// `TopicEndpointSpec` contains exactly one of the endpoint specs of a Bucket Topic
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicEndpointSpec {
    /// Spec of HTTP endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpEndpointSpec>,
    /// Spec of AMQP endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amqp: Option<AmqpEndpointSpec>,
    /// Spec of Kafka endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka: Option<KafkaEndpointSpec>,
}

/// `HTTPEndpointSpec` represent the spec of an HTTP endpoint of a Bucket Topic
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpEndpointSpec {
    /// The URI of the HTTP endpoint to push notification to
    #[schemars(length(min = 1))]
    pub uri: String,
    /// Indicate whether the server certificate is validated by the client or not
    #[serde(rename = "disableVerifySSL", skip_serializing_if = "Option::is_none")]
    pub disable_verify_ssl: Option<bool>,
    /// Send the notifications with the `CloudEvents` header: <https://github.com/cloudevents/spec/blob/main/cloudevents/adapters/aws-s3.md>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_cloud_events: Option<bool>,
}

/// `AMQPEndpointSpec` represent the spec of an AMQP endpoint of a Bucket Topic
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmqpEndpointSpec {
    /// The URI of the AMQP endpoint to push notification to
    #[schemars(length(min = 1))]
    pub uri: String,
    /// Name of the exchange that is used to route messages based on topics
    #[schemars(length(min = 1))]
    pub exchange: String,
    /// Indicate whether the server certificate is validated by the client or not
    #[serde(rename = "disableVerifySSL", skip_serializing_if = "Option::is_none")]
    pub disable_verify_ssl: Option<bool>,
    /// The ack level required for this topic (none/broker/routeable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_level: Option<String>,
}

/// `KafkaEndpointSpec` represent the spec of a Kafka endpoint of a Bucket Topic
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaEndpointSpec {
    /// The URI of the Kafka endpoint to push notification to
    #[schemars(length(min = 1))]
    pub uri: String,
    /// Indicate whether to use SSL when communicating with the broker
    #[serde(rename = "useSSL", skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<bool>,
    /// Indicate whether the server certificate is validated by the client or not
    #[serde(rename = "disableVerifySSL", skip_serializing_if = "Option::is_none")]
    pub disable_verify_ssl: Option<bool>,
    /// The ack level required for this topic (none/broker)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_level: Option<String>,
    /// The authentication mechanism for this topic (PLAIN/SCRAM-SHA-512/SCRAM-SHA-256/GSSAPI/OAUTHBEARER)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    /// The kafka user name to use for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_secret_ref: Option<SecretKeySelector>,
    /// The kafka password to use for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_secret_ref: Option<SecretKeySelector>,
}

/// `BucketTopicStatus` represents the Status of a `CephBucketTopic`
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BucketTopicStatus {
    /// Phase of the topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// The ARN of the topic generated by the RGW
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// `ObservedGeneration` is the latest generation observed by the controller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

/// `BucketNotificationSpec` represent the spec of a Bucket Notification
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    kind = "CephBucketNotification",
    group = "ceph.rook.io",
    version = "v1",
    plural = "cephbucketnotifications"
)]
#[kube(namespaced, status = "Status")]
pub struct CephBucketNotificationSpec {
    /// The name of the topic associated with this notification
    #[schemars(length(min = 1))]
    pub topic: String,
    /// List of events that should trigger the notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    /// Spec of notification filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<NotificationFilterSpec>,
}

/// `NotificationFilterSpec` represent the spec of a Bucket Notification filter
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilterSpec {
    /// Filters based on the object's key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_filters: Option<Vec<NotificationKeyFilterRule>>,
    /// Filters based on the object's metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_filters: Option<Vec<NotificationFilterRule>>,
    /// Filters based on the object's tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<NotificationFilterRule>>,
}

/// `NotificationKeyFilterRule` represent a single key rule in the Notification Filter spec
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationKeyFilterRule {
    /// Name of the filter - prefix/suffix/regex
    #[schemars(regex(pattern = r"^(prefix|suffix|regex)$"))]
    pub name: String,
    /// Value to filter on
    pub value: String,
}

/// `NotificationFilterRule` represent a single rule in the Notification Filter spec
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilterRule {
    /// Name of the metadata or tag
    #[schemars(length(min = 1))]
    pub name: String,
    /// Value to filter on
    pub value: String,
}
