//! Object data source reads against a mocked API server

use std::path::PathBuf;

use http::{Method, Request, Response, StatusCode};
use kube::Client;
use kube::client::Body;
use rook_provider::{Provider, ProviderConfig};
use serde_json::{Value, json};

type ApiServerHandle = tower_test::mock::Handle<Request<Body>, Response<Body>>;

fn mock_provider() -> (Provider, ApiServerHandle) {
    let (service, handle) = tower_test::mock::pair::<Request<Body>, Response<Body>>();
    let client = Client::new(service, "default");
    (Provider::with_client(ProviderConfig::default(), client), handle)
}

/// Answers exactly one GET on `path` with `body`
fn serve_once(
    mut handle: ApiServerHandle,
    path: &'static str,
    status: StatusCode,
    body: Value,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let (request, send) = handle.next_request().await.expect("service not called");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.uri().path(), path);

        let response = Response::builder()
            .status(status)
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        send.send_response(response);
    })
}

fn not_found(resource: &str, name: &str) -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": format!("{resource} \"{name}\" not found"),
        "reason": "NotFound",
        "details": { "name": name, "kind": resource },
        "code": 404
    })
}

#[tokio::test]
async fn reads_a_namespaced_cluster() {
    let (provider, handle) = mock_provider();
    let server = serve_once(
        handle,
        "/apis/ceph.rook.io/v1/namespaces/rook-ceph/cephclusters/my-cluster",
        StatusCode::OK,
        json!({
            "apiVersion": "ceph.rook.io/v1",
            "kind": "CephCluster",
            "metadata": {
                "name": "my-cluster",
                "namespace": "rook-ceph",
                "uid": "1f0e1b7a-2f36-4b5e-9d6c-2c1d3f4e5a6b",
                "resourceVersion": "48213",
                "generation": 2,
                "creationTimestamp": "2026-01-02T03:04:05Z",
                "labels": { "app": "rook-ceph" }
            },
            "spec": {
                "cephVersion": { "image": "quay.io/ceph/ceph:v19.2.2" },
                "dataDirHostPath": "/var/lib/rook",
                "mon": { "count": 3, "allowMultiplePerNode": false }
            },
            "status": {
                "phase": "Ready",
                "ceph": { "health": "HEALTH_OK" }
            }
        }),
    );

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_cluster_v1",
            json!({ "metadata": { "name": "my-cluster", "namespace": "rook-ceph" } }),
        )
        .await;
    server.await.unwrap();

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    let state = response.state.unwrap();

    assert_eq!(state["id"], "rook-ceph/my-cluster");
    assert_eq!(state["metadata"]["resource_version"], "48213");
    assert_eq!(state["metadata"]["generation"], 2);
    assert_eq!(state["metadata"]["creation_timestamp"], "2026-01-02T03:04:05Z");
    assert_eq!(state["metadata"]["labels"]["app"], "rook-ceph");
    assert_eq!(state["spec"]["ceph_version"]["image"], "quay.io/ceph/ceph:v19.2.2");
    assert_eq!(state["spec"]["data_dir_host_path"], "/var/lib/rook");
    assert_eq!(state["spec"]["mon"]["count"], 3);
    assert_eq!(state["spec"]["network"], Value::Null);
    assert_eq!(state["status"]["phase"], "Ready");
    assert_eq!(state["status"]["ceph"]["health"], "HEALTH_OK");
}

#[tokio::test]
async fn reads_a_cluster_scoped_bucket() {
    let (provider, handle) = mock_provider();
    let server = serve_once(
        handle,
        "/apis/objectbucket.io/v1alpha1/objectbuckets/obc-rook-ceph-photos",
        StatusCode::OK,
        json!({
            "apiVersion": "objectbucket.io/v1alpha1",
            "kind": "ObjectBucket",
            "metadata": { "name": "obc-rook-ceph-photos" },
            "spec": {
                "storageClassName": "rook-ceph-bucket",
                "endpoint": { "bucketHost": "rook-ceph-rgw-store.rook-ceph.svc", "bucketPort": 80 }
            },
            "status": { "phase": "Bound" }
        }),
    );

    let response = provider
        .read_data_source(
            "k8s_objectbucket_io_object_bucket_v1alpha1",
            json!({ "metadata": { "name": "obc-rook-ceph-photos" } }),
        )
        .await;
    server.await.unwrap();

    let state = response.state.unwrap();
    assert_eq!(state["id"], "obc-rook-ceph-photos");
    assert_eq!(state["spec"]["endpoint"]["bucket_port"], 80);
    assert_eq!(state["status"]["phase"], "Bound");
}

#[tokio::test]
async fn missing_objects_are_reported() {
    let (provider, handle) = mock_provider();
    let server = serve_once(
        handle,
        "/apis/ceph.rook.io/v1/namespaces/rook-ceph/cephblockpools/replicapool",
        StatusCode::NOT_FOUND,
        not_found("cephblockpools.ceph.rook.io", "replicapool"),
    );

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_block_pool_v1",
            json!({ "metadata": { "name": "replicapool", "namespace": "rook-ceph" } }),
        )
        .await;
    server.await.unwrap();

    assert!(response.state.is_none());
    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Unable to GET resource");
    assert!(diag.detail.contains("not found"), "{}", diag.detail);
}

#[tokio::test]
async fn undecodable_objects_are_reported() {
    let (provider, handle) = mock_provider();
    let server = serve_once(
        handle,
        "/apis/ceph.rook.io/v1/namespaces/rook-ceph/cephclients/glance",
        StatusCode::OK,
        json!({
            "apiVersion": "ceph.rook.io/v1",
            "kind": "CephClient",
            "metadata": { "name": "glance", "namespace": "rook-ceph" },
            "spec": { "secretName": "glance-keyring" }
        }),
    );

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_client_v1",
            json!({ "metadata": { "name": "glance", "namespace": "rook-ceph" } }),
        )
        .await;
    server.await.unwrap();

    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Unable to decode resource");
    assert!(diag.detail.contains("caps"), "{}", diag.detail);
}

#[tokio::test]
async fn invalid_config_never_reaches_the_api() {
    let (provider, mut handle) = mock_provider();

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_filesystem_v1",
            json!({ "metadata": { "name": "myfs" }, "spec": { "metadata_server": {} } }),
        )
        .await;

    let paths: Vec<_> = response
        .diagnostics
        .iter()
        .filter_map(|d| d.attribute.clone())
        .collect();
    assert_eq!(paths, vec!["metadata.namespace", "spec"]);

    drop(provider);
    assert!(handle.next_request().await.is_none());
}

#[tokio::test]
async fn client_configuration_errors_are_reported() {
    let provider = Provider::new(ProviderConfig {
        kubeconfig: Some(PathBuf::from("/nonexistent/kubeconfig")),
        ..ProviderConfig::default()
    });

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_nfs_v1",
            json!({ "metadata": { "name": "my-nfs", "namespace": "rook-ceph" } }),
        )
        .await;

    let diag = response.diagnostics.iter().next().unwrap();
    assert_eq!(diag.summary, "Unable to configure Kubernetes client");
}

#[tokio::test]
async fn manifests_never_contact_the_api() {
    let (provider, mut handle) = mock_provider();

    let response = provider
        .read_data_source(
            "k8s_ceph_rook_io_ceph_object_store_user_v1_manifest",
            json!({
                "metadata": { "name": "photos", "namespace": "rook-ceph" },
                "spec": {
                    "store": "my-store",
                    "display_name": "Photo service",
                    "capabilities": { "amz_cache": "read" }
                }
            }),
        )
        .await;

    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    let yaml = response.state.unwrap()["yaml"].as_str().unwrap().to_string();
    assert!(yaml.contains("kind: CephObjectStoreUser"));
    assert!(yaml.contains("displayName: Photo service"));
    assert!(yaml.contains("amz-cache: read"));

    drop(provider);
    assert!(handle.next_request().await.is_none());
}
