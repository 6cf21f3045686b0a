//! Shared testing utilities for addon-publish CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment inputs the binary reads; cleared so the host environment cannot leak in.
const INPUT_VARS: [&str; 12] = [
    "SPEC_FILE",
    "ARTIFACT_PATH",
    "NAME",
    "PROJECT",
    "NAMESPACE",
    "VERSION",
    "API_KEY",
    "API_ENDPOINT",
    "DRY_RUN",
    "HELM_BIN",
    "RCTL_BIN",
    "GITHUB_OUTPUT",
];

/// Testing harness providing an isolated workspace plus fake `helm` and `rctl` executables.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tmp_dir: PathBuf,
    pub tools: FakeTools,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base = fs::canonicalize(root.path()).expect("Failed to canonicalize temp directory");
        let work_dir = base.join("work");
        let tmp_dir = base.join("tmp");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&tmp_dir).expect("Failed to create test tmp directory");
        let tools = FakeTools::new(&base.join("tools"));

        Self { root, work_dir, tmp_dir, tools }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a plain process command for the binary, for tests that manage the child directly.
    pub fn process(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_addon-publish"));
        for var in INPUT_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir)
            .env("TMPDIR", &self.tmp_dir)
            .env("HELM_BIN", &self.tools.helm)
            .env("RCTL_BIN", &self.tools.rctl)
            .env("API_KEY", "test-api-key");
        cmd
    }

    /// Build a command for invoking the compiled binary inside the workspace.
    pub fn cli(&self) -> Command {
        Command::from_std(self.process())
    }

    /// Write a file relative to the workspace, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directory");
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read workspace file")
    }

    /// Create a minimal chart directory.
    pub fn chart(&self, relative: &str) -> PathBuf {
        let name = Path::new(relative).file_name().unwrap().to_string_lossy().into_owned();
        self.write(&format!("{relative}/Chart.yaml"), &format!("apiVersion: v2\nname: {name}\nversion: 0.1.0\n"));
        self.write(&format!("{relative}/templates/service.yaml"), "kind: Service\n");
        self.work_dir.join(relative)
    }

    /// Entries currently present in the binary's temp directory.
    pub fn scratch_entries(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.tmp_dir).unwrap().map(|entry| entry.unwrap().path()).collect()
    }

    /// Assert that no scratch directory survived the run.
    pub fn assert_scratch_cleaned(&self) {
        let leftovers = self.scratch_entries();
        assert!(leftovers.is_empty(), "scratch directories left behind: {:?}", leftovers);
    }
}

/// Shell-script stand-ins for `helm` and `rctl` that log their invocations.
#[allow(dead_code)]
pub struct FakeTools {
    pub helm: PathBuf,
    /// `helm` that marks `slow_helm_started` and then hangs.
    pub slow_helm: PathBuf,
    pub slow_helm_started: PathBuf,
    pub rctl: PathBuf,
    /// `rctl` that always fails authentication.
    pub rejecting_rctl: PathBuf,
    pub helm_log: PathBuf,
    pub rctl_log: PathBuf,
    /// Copy of the spec document as it was when `rctl` ran.
    pub published_spec: PathBuf,
}

#[allow(dead_code)]
impl FakeTools {
    pub fn new(dir: &Path) -> Self {
        fs::create_dir_all(dir).expect("Failed to create tools dir");
        let helm_log = dir.join("helm.log");
        let rctl_log = dir.join("rctl.log");
        let published_spec = dir.join("published-spec.yaml");

        let helm = dir.join("helm");
        write_script(
            &helm,
            &format!(
                r#"#!/bin/sh
echo "$*" >> "{log}"
[ "$1" = "package" ] || exit 2
chart="$2"
dest=""
while [ $# -gt 0 ]; do
    if [ "$1" = "--destination" ]; then dest="$2"; fi
    shift
done
if [ -f "$chart/BROKEN" ]; then
    echo "Error: found in Chart.yaml, but missing in charts/ directory: redis" >&2
    exit 1
fi
name=$(basename "$chart")
echo "archive of $name" > "$dest/$name-0.1.0.tgz"
echo "Successfully packaged chart and saved it to: $dest/$name-0.1.0.tgz"
"#,
                log = helm_log.display()
            ),
        );

        let slow_helm = dir.join("slow-helm");
        let slow_helm_started = dir.join("slow-helm.started");
        write_script(
            &slow_helm,
            &format!(
                "#!/bin/sh\ntouch \"{marker}\"\nexec sleep 30\n",
                marker = slow_helm_started.display()
            ),
        );

        let rctl = dir.join("rctl");
        write_script(
            &rctl,
            &format!(
                r#"#!/bin/sh
echo "$*" >> "{log}"
echo "RCTL_API_KEY=$RCTL_API_KEY" >> "{log}"
echo "RCTL_API_SECRET=$RCTL_API_SECRET" >> "{log}"
echo "RCTL_REST_ENDPOINT=$RCTL_REST_ENDPOINT" >> "{log}"
cp "$3" "{spec}"
if [ -n "$FAKE_RCTL_FAIL" ]; then
    echo "Error: unauthorized" >&2
    exit 1
fi
echo "addon applied"
"#,
                log = rctl_log.display(),
                spec = published_spec.display()
            ),
        );

        let rejecting_rctl = dir.join("rejecting-rctl");
        write_script(&rejecting_rctl, "#!/bin/sh\necho \"Error: unauthorized\" >&2\nexit 1\n");

        Self {
            helm,
            slow_helm,
            slow_helm_started,
            rctl,
            rejecting_rctl,
            helm_log,
            rctl_log,
            published_spec,
        }
    }

    pub fn helm_calls(&self) -> String {
        fs::read_to_string(&self.helm_log).unwrap_or_default()
    }

    pub fn rctl_calls(&self) -> String {
        fs::read_to_string(&self.rctl_log).unwrap_or_default()
    }

    pub fn published(&self) -> serde_yaml::Value {
        let content =
            fs::read_to_string(&self.published_spec).expect("rctl was not invoked with a spec");
        serde_yaml::from_str(&content).expect("published spec is not valid YAML")
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
