//! Static content tables for the installer.
//!
//! Everything the installer writes is fixed at build time: the directory
//! tree, the fully-written documentation files, and the placeholder specs.
//! Payload bodies live under `resources/payloads/` and are embedded here so
//! the binary is self-contained.

/// Directories created before any file is written, in order.
pub const DIRECTORIES: &[&str] = &[
    "terraform/aws",
    "terraform/gcp",
    "kubernetes/rbac",
    "kubernetes/network-policies",
    "monitoring/prometheus",
    "monitoring/loki",
    "monitoring/gpu-exporter",
    "monitoring/deployment",
    "inference/app",
    "training/src",
    "training/docker",
    "training/scripts",
    "istio",
    "argocd/applications",
    "argocd/projects",
    ".github/workflows",
    "scripts",
    "tests",
    "docs",
];

/// Files written with their full literal content, in order.
pub const LITERAL_FILES: &[(&str, &str)] = &[
    ("README.md", include_str!("../resources/payloads/README.md")),
    (".gitignore", include_str!("../resources/payloads/gitignore")),
    ("LICENSE", include_str!("../resources/payloads/LICENSE")),
    (
        "docs/ARCHITECTURE.md",
        include_str!("../resources/payloads/ARCHITECTURE.md"),
    ),
    (
        "docs/TROUBLESHOOTING.md",
        include_str!("../resources/payloads/TROUBLESHOOTING.md"),
    ),
];

/// Placeholder files: each gets a short instructional document telling the
/// user which project artifact to paste in by hand.
pub const PLACEHOLDERS: &[(&str, &str)] = &[
    (
        "terraform/aws/main.tf",
        "Project A - AWS Terraform Complete Implementation",
    ),
    ("terraform/aws/variables.tf", "Project A - Terraform Variables"),
    (
        "terraform/gcp/main.tf",
        "Project A - GCP Terraform Complete Implementation",
    ),
    ("terraform/gcp/variables.tf", "Project A - GCP Variables and Config"),
    (
        "training/src/train_distributed.py",
        "Project B - Complete Distributed Training Implementation",
    ),
    (
        "training/docker/Dockerfile",
        "Project B - Docker and Kubernetes Configuration (Dockerfile section)",
    ),
    (
        "kubernetes/training-job.yaml",
        "Project B - Docker and Kubernetes Configuration (training-job.yaml section)",
    ),
    (
        "monitoring/prometheus/values.yaml",
        "Project C - Complete Monitoring Stack (prometheus section)",
    ),
    (
        "monitoring/gpu-exporter/gpu_metrics.py",
        "Project C - Complete Monitoring Stack (gpu_metrics.py section)",
    ),
    ("inference/app/main.py", "Project D - Complete AI Inference Platform"),
    (
        "inference/Dockerfile",
        "Project D - Complete AI Inference Platform (Dockerfile section)",
    ),
    (
        "kubernetes/inference-deployment.yaml",
        "Project D - Complete AI Inference Platform (deployment.yaml section)",
    ),
    (
        ".github/workflows/ci-cd-pipeline.yaml",
        "Complete CI/CD Pipeline and GitOps Configuration",
    ),
    (
        "scripts/quick-start.sh",
        "Automated Deployment Scripts and Documentation (quick-start.sh section)",
    ),
    (
        "scripts/setup-local-dev.sh",
        "Automated Deployment Scripts and Documentation (setup-local-dev.sh section)",
    ),
];

/// Walkthrough written after the placeholder loop.
pub const SETUP_INSTRUCTIONS: &str =
    include_str!("../resources/payloads/SETUP_INSTRUCTIONS.md");

/// Command cheat-sheet written alongside the setup instructions.
pub const QUICK_REFERENCE: &str =
    include_str!("../resources/payloads/QUICK_REFERENCE.md");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_file_parent_is_in_directory_list() {
        // Placeholder and literal paths with a parent directory must have
        // that parent covered by the directory pass, either listed outright
        // or created as an ancestor of a listed entry.
        let covered = |parent: &str| {
            DIRECTORIES
                .iter()
                .any(|d| *d == parent || d.starts_with(&format!("{}/", parent)))
        };

        let all_paths = LITERAL_FILES
            .iter()
            .chain(PLACEHOLDERS.iter())
            .map(|(path, _)| *path);

        for path in all_paths {
            if let Some((parent, _)) = path.rsplit_once('/') {
                assert!(
                    covered(parent),
                    "parent '{}' of '{}' missing from DIRECTORIES",
                    parent,
                    path
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_output_paths() {
        let mut seen = std::collections::HashSet::new();
        for (path, _) in LITERAL_FILES.iter().chain(PLACEHOLDERS.iter()) {
            assert!(seen.insert(*path), "path '{}' listed twice", path);
        }
        assert!(!seen.contains("docs/SETUP_INSTRUCTIONS.md"));
        assert!(!seen.contains("docs/QUICK_REFERENCE.md"));
    }

    #[test]
    fn test_payloads_are_nonempty() {
        for (path, content) in LITERAL_FILES {
            assert!(!content.is_empty(), "empty payload for '{}'", path);
        }
        assert!(SETUP_INSTRUCTIONS.contains("Setup Instructions"));
        assert!(QUICK_REFERENCE.contains("Quick Reference"));
    }
}
