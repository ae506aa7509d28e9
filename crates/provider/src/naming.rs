//! Attribute and data source naming

/// Converts a Kubernetes JSON field or kind name into `snake_case`.
///
/// Acronym runs stay together (`CephCOSIDriver` → `ceph_cosi_driver`, `ARN` → `arn`)
/// and separators (`-`, `.`) become underscores (`amz-cache` → `amz_cache`).
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '.' || c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Name of the object data source for a resource, for example `k8s_ceph_rook_io_ceph_cluster_v1`
#[must_use]
pub fn object_type_name(provider: &str, group: &str, kind: &str, version: &str) -> String {
    format!(
        "{provider}_{}_{}_{}",
        to_snake_case(group),
        to_snake_case(kind),
        to_snake_case(version)
    )
}

/// Name of the manifest data source for a resource, for example `k8s_ceph_rook_io_ceph_cluster_v1_manifest`
#[must_use]
pub fn manifest_type_name(provider: &str, group: &str, kind: &str, version: &str) -> String {
    format!("{}_manifest", object_type_name(provider, group, kind, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_fields() {
        assert_eq!(to_snake_case("dataDirHostPath"), "data_dir_host_path");
        assert_eq!(to_snake_case("allowMultiplePerNode"), "allow_multiple_per_node");
        assert_eq!(to_snake_case("s3"), "s3");
        assert_eq!(to_snake_case("enableRBDStats"), "enable_rbd_stats");
        assert_eq!(
            to_snake_case("waitTimeoutForHealthyOSDInMinutes"),
            "wait_timeout_for_healthy_osd_in_minutes"
        );
    }

    #[test]
    fn acronyms_and_separators() {
        assert_eq!(to_snake_case("ARN"), "arn");
        assert_eq!(to_snake_case("CephCOSIDriver"), "ceph_cosi_driver");
        assert_eq!(to_snake_case("CephNFS"), "ceph_nfs");
        assert_eq!(to_snake_case("amz-cache"), "amz_cache");
        assert_eq!(to_snake_case("site_name"), "site_name");
        assert_eq!(to_snake_case("clusterID"), "cluster_id");
    }

    #[test]
    fn data_source_type_names() {
        assert_eq!(
            object_type_name("k8s", "ceph.rook.io", "CephRBDMirror", "v1"),
            "k8s_ceph_rook_io_ceph_rbd_mirror_v1"
        );
        assert_eq!(
            manifest_type_name("k8s", "objectbucket.io", "ObjectBucketClaim", "v1alpha1"),
            "k8s_objectbucket_io_object_bucket_claim_v1alpha1_manifest"
        );
    }
}
