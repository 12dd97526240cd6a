//! Docker execution prefix

use toolgate_domain::policy::entities::{ExecutorKind, ExecutorSpec};

/// Build the `docker run` prefix for a docker executor spec.
///
/// Returns an empty prefix for the local executor. The policy loader has
/// already guaranteed that a docker spec carries an image.
pub fn docker_prefix(spec: &ExecutorSpec) -> Vec<String> {
    if spec.kind != ExecutorKind::Docker {
        return Vec::new();
    }

    let mut prefix = vec!["docker".to_string(), "run".to_string(), "--rm".to_string()];
    for volume in &spec.volumes {
        prefix.push("-v".to_string());
        prefix.push(volume.clone());
    }
    if let Some(network) = &spec.network {
        prefix.push("--network".to_string());
        prefix.push(network.clone());
    }
    if let Some(working_dir) = &spec.working_dir {
        prefix.push("-w".to_string());
        prefix.push(working_dir.clone());
    }
    if let Some(image) = &spec.image {
        prefix.push(image.clone());
    }
    prefix
}
