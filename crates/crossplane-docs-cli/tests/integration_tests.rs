//! Integration tests for CLI commands

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Helper to run crossplane-docs command
fn crossplane_docs(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_crossplane-docs"))
        .args(args)
        .output()
        .expect("Failed to execute crossplane-docs")
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

const XRD: &str = r#"apiVersion: apiextensions.crossplane.io/v1
kind: CompositeResourceDefinition
metadata:
  name: xdatabases.example.org
spec:
  group: example.org
  names:
    kind: XDatabase
    plural: xdatabases
  claimNames:
    kind: Database
    plural: databases
  versions:
    - name: v1alpha1
      served: true
      referenceable: true
      schema:
        openAPIV3Schema:
          type: object
          description: A managed SQL database
          properties:
            spec:
              type: object
              required:
                - engine
              properties:
                engine:
                  type: string
                  description: Database engine
                  enum: [postgres, mysql]
                storageGB:
                  type: integer
                  default: 20
                  minimum: 10
                network:
                  type: object
                  properties:
                    subnetId:
                      type: string
"#;

const COMPOSITION: &str = r#"apiVersion: apiextensions.crossplane.io/v1
kind: Composition
metadata:
  name: xdatabases-aws
spec:
  compositeTypeRef:
    apiVersion: example.org/v1alpha1
    kind: XDatabase
  mode: Pipeline
  pipeline:
    - step: patch-and-transform
      functionRef:
        name: function-patch-and-transform
      input:
        apiVersion: pt.fn.crossplane.io/v1beta1
        kind: Resources
        resources:
          - name: instance
            base:
              apiVersion: rds.aws.upbound.io/v1beta1
              kind: Instance
            patches:
              - type: FromCompositeFieldPath
                fromFieldPath: spec.storageGB
                toFieldPath: spec.forProvider.allocatedStorage
          - name: subnet-group
            base:
              apiVersion: rds.aws.upbound.io/v1beta1
              kind: SubnetGroup
"#;

mod xrd_command {
    use super::*;

    #[test]
    fn test_xrd_to_stdout() {
        let dir = TempDir::new().unwrap();
        let xrd = write_fixture(&dir, "xrd.yaml", XRD);

        let output = crossplane_docs(&["xrd", path_str(&xrd)]);

        assert!(output.status.success(), "Expected success for valid XRD");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# XDatabase\n"));
        assert!(stdout.contains("A managed SQL database"));
        assert!(stdout.contains("**Claim Kind:** Database"));
        assert!(stdout.contains(
            "| engine | string | Database engine | ✅ | - | Allowed: `postgres`, `mysql` |"
        ));
        assert!(stdout.contains("| storageGB | integer |  | ❌ | `20` | Min: 10 |"));
        assert!(stdout.contains("| &nbsp;&nbsp;↳ subnetId | string |"));
        assert!(!stdout.contains("## Status Fields"));
    }

    #[test]
    fn test_xrd_hide_nested() {
        let dir = TempDir::new().unwrap();
        let xrd = write_fixture(&dir, "xrd.yaml", XRD);

        let output = crossplane_docs(&["xrd", path_str(&xrd), "--show-nested=false"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("| network | object |"));
        assert!(!stdout.contains("subnetId"));
    }

    #[test]
    fn test_xrd_to_file() {
        let dir = TempDir::new().unwrap();
        let xrd = write_fixture(&dir, "xrd.yaml", XRD);
        let readme = dir.path().join("README.md");

        let output = crossplane_docs(&["xrd", path_str(&xrd), "-o", path_str(&readme)]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Documentation generated successfully"));

        let written = fs::read_to_string(&readme).unwrap();
        assert!(written.starts_with("# XDatabase\n"));
        assert!(written.contains("## Example"));
    }

    #[test]
    fn test_xrd_missing_file() {
        let output = crossplane_docs(&["xrd", "/nonexistent/xrd.yaml"]);

        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("File not found"));
    }

    #[test]
    fn test_xrd_without_versions() {
        let dir = TempDir::new().unwrap();
        let xrd = write_fixture(
            &dir,
            "xrd.yaml",
            "kind: CompositeResourceDefinition\nspec:\n  group: example.org\n  versions: []\n",
        );

        let output = crossplane_docs(&["xrd", path_str(&xrd)]);

        assert_eq!(output.status.code(), Some(3));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("no versions found in XRD"));
    }

    #[test]
    fn test_xrd_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let xrd = write_fixture(&dir, "xrd.yaml", "spec: [unclosed\n");

        let output = crossplane_docs(&["xrd", path_str(&xrd)]);

        assert_eq!(output.status.code(), Some(2));
    }
}

mod composition_command {
    use super::*;

    #[test]
    fn test_composition_pipeline() {
        let dir = TempDir::new().unwrap();
        let comp = write_fixture(&dir, "composition.yaml", COMPOSITION);

        let output = crossplane_docs(&["composition", path_str(&comp)]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# XDatabase Composition\n"));
        assert!(stdout.contains("**Composition Name:** xdatabases-aws"));
        assert!(stdout.contains("**Mode:** Pipeline"));
        assert!(stdout.contains("This composition creates 2 managed resource(s):"));
        assert!(stdout.contains(
            "| spec.storageGB | spec.forProvider.allocatedStorage | Direct copy |"
        ));
        assert!(stdout.contains("### subnet-group (SubnetGroup)\n\nNo patches defined."));
    }

    #[test]
    fn test_composition_hide_patches() {
        let dir = TempDir::new().unwrap();
        let comp = write_fixture(&dir, "composition.yaml", COMPOSITION);

        let output = crossplane_docs(&["composition", path_str(&comp), "--show-patches=false"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("| instance | Instance | rds.aws.upbound.io/v1beta1 |"));
        assert!(!stdout.contains("## Field Mappings"));
    }

    #[test]
    fn test_composition_missing_file() {
        let output = crossplane_docs(&["composition", "/nonexistent/composition.yaml"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("File not found"));
    }
}

mod general {
    use super::*;

    #[test]
    fn test_version() {
        let output = crossplane_docs(&["--version"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("crossplane-docs"));
    }

    #[test]
    fn test_help_lists_commands() {
        let output = crossplane_docs(&["--help"]);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("xrd"));
        assert!(stdout.contains("composition"));
    }
}
