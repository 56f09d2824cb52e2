use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn goo_release(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goo-release"))
        .args(args)
        .current_dir(dir)
        .env_remove("RELEASE_DIR")
        .output()
        .expect("run goo-release")
}

#[test]
fn no_arguments_prints_usage() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("out")).unwrap();

    let output = goo_release(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    assert!(temp.path().join("out").exists());
}

#[test]
fn two_arguments_prints_usage() {
    let temp = tempdir().unwrap();

    let output = goo_release(temp.path(), &["15.0.0", "16.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn help_exits_cleanly() {
    let temp = tempdir().unwrap();

    let output = goo_release(temp.path(), &["--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("<VERSION>"));
}

#[test]
fn malformed_config_fails_before_side_effects() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("out/stale")).unwrap();
    fs::write(temp.path().join("release.toml"), "[tools\n").unwrap();

    let output = goo_release(temp.path(), &["15.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(temp.path().join("out/stale").exists());
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A working tree whose tools are shell scripts.
    fn fake_goojs(dir: &Path, minify_body: &str) {
        fs::create_dir_all(dir.join("tools")).unwrap();
        script(&dir.join("tools/grunt"), minify_body);
        script(&dir.join("tools/cake"), "exit 0");
        fs::write(
            dir.join("release.toml"),
            "[tools]\nminifier = \"tools/grunt\"\nbuild_tool = \"tools/cake\"\n",
        )
        .unwrap();

        for lib in [
            "p2",
            "box2d",
            "cannon",
            "soundmanager2",
            "howler",
            "crunch",
            "hammerv2",
        ] {
            let lib_dir = dir.join("lib").join(lib);
            fs::create_dir_all(&lib_dir).unwrap();
            fs::write(lib_dir.join(format!("{}.js", lib)), lib).unwrap();
        }
        for tree in ["goojs-jsdoc", "visual-test", "examples"] {
            fs::create_dir_all(dir.join(tree)).unwrap();
            fs::write(dir.join(tree).join("index.html"), tree).unwrap();
        }
        for file in [
            "lib/require.js",
            "lib/ammo.small.js",
            "lib/polyk.js",
            "COPYING",
            "LICENSE",
            "CHANGES",
        ] {
            fs::write(dir.join(file), file).unwrap();
        }
    }

    /// Minifier body that checks the version flag and writes every bundle.
    fn write_bundles(version: &str) -> String {
        format!(
            "[ \"$2\" = \"--goo-version={}\" ] || exit 9\n\
             mkdir -p out\n\
             for f in goo fsmpack geometrypack quadpack timelinepack; do echo \"$f\" > out/$f.js; done",
            version
        )
    }

    #[test]
    fn assembles_release_end_to_end() {
        let temp = tempdir().unwrap();
        fake_goojs(temp.path(), &write_bundles("15.0.0"));

        let output = goo_release(temp.path(), &["15.0.0"]);

        assert!(
            output.status.success(),
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        let release = temp.path().join("out/release/goo-15.0.0");
        assert_eq!(fs::read_to_string(release.join("lib/goo.js")).unwrap(), "goo\n");
        assert!(release.join("lib/timelinepack.js").is_file());
        assert!(release.join("lib/hammerv2/hammerv2.js").is_file());
        assert!(release.join("docs/index.html").is_file());
        assert_eq!(fs::read_to_string(release.join("CHANGES")).unwrap(), "CHANGES");
        assert!(String::from_utf8_lossy(&output.stdout).contains("Creating release goo-15.0.0"));
    }

    #[test]
    fn failing_tool_exit_status_propagates() {
        let temp = tempdir().unwrap();
        fake_goojs(temp.path(), "exit 7");

        let output = goo_release(temp.path(), &["15.0.0"]);

        assert_eq!(output.status.code(), Some(7));
        assert!(!temp.path().join("out/release").exists());
    }

    #[test]
    fn release_dir_env_overrides_destination() {
        let temp = tempdir().unwrap();
        fake_goojs(temp.path(), &write_bundles("15.0.0"));
        let target = temp.path().join("publish");

        let output = Command::new(env!("CARGO_BIN_EXE_goo-release"))
            .arg("15.0.0")
            .current_dir(temp.path())
            .env("RELEASE_DIR", &target)
            .output()
            .expect("run goo-release");

        assert!(output.status.success());
        assert!(target.join("lib/goo.js").is_file());
        assert!(!temp.path().join("out/release").exists());
    }

    #[test]
    fn version_with_leading_hyphen_is_passed_through() {
        let temp = tempdir().unwrap();
        fake_goojs(temp.path(), &write_bundles("-rc1"));

        let output = goo_release(temp.path(), &["-rc1"]);

        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(temp.path().join("out/release/goo--rc1/lib/goo.js").is_file());
    }
}
