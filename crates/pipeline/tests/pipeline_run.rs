//! End-to-end pipeline tests against stub host tools
//!
//! A stub interpreter, installer and packager stand in for the real
//! toolchain so the five steps run for real: environment trees get
//! created and deleted, artifacts and descriptors get written, and the
//! fail-fast behavior is observable from the outside.

#![cfg(unix)]

use onefile_config::Config;
use onefile_errors::{EnvironmentError, Error, InstallError, PackagingError};
use onefile_events::{
    AppEvent, EnvironmentEvent, EventReceiver, GeneralEvent, InstallEvent, PackageEvent,
};
use onefile_pipeline::{BuildContext, Pipeline};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const PYINSTALLER_STUB: &str = r#"#!/bin/sh
name=""
dist="dist"
work="build"
onefile=0
entry=""
while [ $# -gt 0 ]; do
  case "$1" in
    --onefile) onefile=1; shift ;;
    --noconsole) shift ;;
    --name) name="$2"; shift 2 ;;
    --add-binary)
      src="${2%%:*}"
      [ -f "$src" ] || { echo "embed source missing: $src" >&2; exit 3; }
      shift 2 ;;
    --distpath) dist="$2"; shift 2 ;;
    --workpath) work="$2"; shift 2 ;;
    *) entry="$1"; shift ;;
  esac
done
[ "$onefile" = 1 ] || exit 4
[ -f "$entry" ] || { echo "entry point missing: $entry" >&2; exit 5; }
mkdir -p "$dist" "$work"
printf 'bundle:%s\n' "$name" > "$dist/$name"
printf 'generated descriptor' > "$name.spec"
"#;

struct Fixture {
    dir: tempfile::TempDir,
    config: Config,
}

impl Fixture {
    /// Lay out a working directory with stub tools, an entry point and an
    /// embeddable binary, and a config pointing the pipeline at them.
    fn new(pip_body: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let tools = dir.path().join("tools");
        fs::create_dir(&tools).expect("mkdir tools");

        let pyinstaller_src = tools.join("pyinstaller-stub");
        write_executable(&pyinstaller_src, PYINSTALLER_STUB);

        // pip stub "installs" the packager into its own bin directory
        let pip_src = tools.join("pip-stub");
        write_executable(
            &pip_src,
            &format!(
                "#!/bin/sh\n[ \"$1\" = install ] || exit 2\n{pip_body}\nbindir=$(dirname \"$0\")\ncp \"{}\" \"$bindir/pyinstaller\"\nchmod 755 \"$bindir/pyinstaller\"\n",
                pyinstaller_src.display()
            ),
        );

        // interpreter stub handles `-m venv <dir>` and seeds the env with pip
        let interpreter = tools.join("python3.11");
        write_executable(
            &interpreter,
            &format!(
                "#!/bin/sh\n[ \"$1\" = -m ] && [ \"$2\" = venv ] || exit 2\nmkdir -p \"$3/bin\"\ncp \"{}\" \"$3/bin/pip\"\nchmod 755 \"$3/bin/pip\"\n",
                pip_src.display()
            ),
        );

        fs::write(dir.path().join("main.py"), "print('launcher')\n").expect("entry point");
        fs::write(dir.path().join("7z"), "archiver").expect("embed source");

        let mut config = Config::default();
        config.environment.interpreter_path = Some(interpreter);
        config.packaging.embed_source = dir.path().join("7z");

        Self { dir, config }
    }

    fn context(&self) -> (BuildContext, EventReceiver) {
        let (tx, rx) = onefile_events::channel();
        let context =
            BuildContext::new(self.config.clone(), self.dir.path().to_path_buf())
                .with_event_sender(tx);
        (context, rx)
    }

    fn artifact(&self) -> PathBuf {
        self.dir
            .path()
            .join(&self.config.packaging.dist_dir)
            .join(&self.config.packaging.artifact_name)
    }

    fn spec_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.dir.path())
            .expect("read workdir")
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "spec") && p.is_file())
            .collect()
    }
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod");
}

fn drain(mut rx: EventReceiver) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn successful_run_produces_one_artifact_and_cleans_descriptors() {
    let fixture = Fixture::new("");
    let (context, rx) = fixture.context();

    let report = Pipeline::new(context).run().await.expect("pipeline run");

    assert_eq!(report.artifact, fixture.artifact());
    assert!(report.artifact.is_file());
    assert_eq!(report.removed_descriptors, 1);
    assert!(fixture.spec_files().is_empty());
    assert!(fixture.dir.path().join("venv/bin/pip").is_file());

    // The three phase banners arrive in pipeline order
    let events = drain(rx);
    let creating = events
        .iter()
        .position(|e| matches!(e, AppEvent::Environment(EnvironmentEvent::Creating { .. })))
        .expect("environment banner");
    let installing = events
        .iter()
        .position(|e| matches!(e, AppEvent::Install(InstallEvent::Started { .. })))
        .expect("install banner");
    let building = events
        .iter()
        .position(|e| matches!(e, AppEvent::Package(PackageEvent::Started { .. })))
        .expect("build banner");
    assert!(creating < installing && installing < building);
    assert!(events
        .iter()
        .any(|e| matches!(e, AppEvent::Package(PackageEvent::Completed { .. }))));
}

#[tokio::test]
async fn missing_embed_binary_fails_packaging_and_skips_cleanup() {
    let fixture = Fixture::new("");
    fs::remove_file(fixture.dir.path().join("7z")).expect("remove embed source");
    fs::write(fixture.dir.path().join("stale.spec"), "old").expect("stale descriptor");
    let (context, _rx) = fixture.context();

    let err = Pipeline::new(context).run().await.expect_err("must fail");

    assert!(matches!(
        err,
        Error::Packaging(PackagingError::EmbeddedBinaryMissing { .. })
    ));
    assert!(!fixture.artifact().exists());
    // Cleanup never ran, so the stale descriptor survives
    assert!(fixture.dir.path().join("stale.spec").is_file());
}

#[tokio::test]
async fn missing_interpreter_fails_before_any_tool_runs() {
    let fixture = Fixture::new("");
    let mut config = fixture.config.clone();
    config.environment.interpreter_path = Some(fixture.dir.path().join("tools/python3.12"));
    let (tx, _rx) = onefile_events::channel();
    let context = BuildContext::new(config, fixture.dir.path().to_path_buf()).with_event_sender(tx);

    let err = Pipeline::new(context).run().await.expect_err("must fail");

    assert!(matches!(
        err,
        Error::Environment(EnvironmentError::InterpreterNotFound { .. })
    ));
    assert!(!fixture.dir.path().join("venv").exists());
    assert!(!fixture.artifact().exists());
}

#[tokio::test]
async fn failed_install_aborts_before_packaging() {
    let fixture = Fixture::new("exit 1");
    let (context, rx) = fixture.context();

    let err = Pipeline::new(context).run().await.expect_err("must fail");

    assert!(matches!(
        err,
        Error::Install(InstallError::InstallerFailed { .. })
    ));
    assert!(!fixture.artifact().exists());
    assert!(fixture.spec_files().is_empty());

    // The failure is announced on the event channel as well as returned
    let events = drain(rx);
    assert!(events.iter().any(|e| matches!(
        e,
        AppEvent::General(GeneralEvent::OperationFailed { operation, .. })
            if operation == "build"
    )));
    assert!(!events
        .iter()
        .any(|e| matches!(e, AppEvent::Package(PackageEvent::Started { .. }))));
}

#[tokio::test]
async fn rerun_recreates_environment_and_overwrites_artifact() {
    let fixture = Fixture::new("");

    let (context, _rx) = fixture.context();
    Pipeline::new(context).run().await.expect("first run");
    let first = fs::read(fixture.artifact()).expect("first artifact");

    let (context, rx) = fixture.context();
    Pipeline::new(context).run().await.expect("second run");
    let second = fs::read(fixture.artifact()).expect("second artifact");

    // Identical name and content at the same destination path
    assert_eq!(first, second);
    let artifacts: Vec<_> = fs::read_dir(fixture.dir.path().join("dist"))
        .expect("read dist")
        .collect();
    assert_eq!(artifacts.len(), 1);

    // The second run deleted the first run's environment tree
    assert!(drain(rx)
        .iter()
        .any(|e| matches!(e, AppEvent::Environment(EnvironmentEvent::StaleRemoved { .. }))));
}
