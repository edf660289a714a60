//! ---
//! ccpy_section: "06-testing"
//! ccpy_subsection: "integration-tests"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Generated package and native resolver agree on layout and argv."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use ccpy_codegen::template::INIT_TEMPLATE;
use ccpy_codegen::{generate, GeneratorConfig};
use ccpy_invoke::{check, Flags};
use ccpy_platform::{BinaryLocator, Target, BINARIES_DIR, BINARY_PREFIX};

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn generate_into(root: &Path, version: &str) -> PathBuf {
    let config = GeneratorConfig {
        output_dir: root.join("cc_check"),
        ..GeneratorConfig::default()
    };
    generate(version, &config).unwrap().output_dir
}

#[cfg(unix)]
fn install_echo_binary(package_dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let locator = BinaryLocator::new(package_dir);
    let path = locator.path_for(Target::host().unwrap());
    fs::create_dir_all(locator.binaries_dir()).unwrap();
    fs::write(&path, "#!/bin/sh\nprintf '%s|' \"$@\"\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn template_uses_native_binary_naming() {
    assert!(INIT_TEMPLATE.contains(&format!("/ \"{BINARIES_DIR}\" /")));
    assert!(INIT_TEMPLATE.contains(&format!("f\"{BINARY_PREFIX}-{{os_name}}-{{arch}}\"")));
    for target in Target::ALL {
        assert!(INIT_TEMPLATE.contains(&format!("\"{}\"", target.os().as_str())));
        assert!(INIT_TEMPLATE.contains(&format!("\"{}\"", target.arch().as_str())));
    }
}

#[cfg(unix)]
#[test]
fn native_check_runs_inside_generated_package() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|p| p.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let package_dir = generate_into(dir.path(), "1.0.0");
    install_echo_binary(&package_dir);

    let flags = Flags::new()
        .with("verbose", true)
        .with("format", "json")
        .with("dry_run", None::<&str>);
    let outcome = check(&package_dir, Some("msg.txt"), &flags).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.stdout, "check|msg.txt|--verbose|--format|json|");
}

/// Runs the generated Python against the same fake binary when an interpreter is present.
#[cfg(unix)]
#[test]
fn generated_python_matches_native_argv() {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|p| p.into_inner());
    let Ok(probe) = Command::new("python3").arg("--version").output() else {
        eprintln!("python3 not available; skipping");
        return;
    };
    if !probe.status.success() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let package_dir = generate_into(dir.path(), "3.1.4");
    install_echo_binary(&package_dir);

    let script = "import cc_check\n\
                  print(cc_check.__version__)\n\
                  ok, out, err = cc_check.check('msg.txt', verbose=True, format='json', dry_run=None, strict=False)\n\
                  print(ok, out)\n";
    let output = Command::new("python3")
        .arg("-c")
        .arg(script)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let native = check(
        &package_dir,
        Some("msg.txt"),
        &Flags::new()
            .with("verbose", true)
            .with("format", "json")
            .with("dry_run", None::<&str>)
            .with("strict", false),
    )
    .unwrap();
    let expected = format!("3.1.4\nTrue {}\n", native.stdout);
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);

    let entry = Command::new("python3")
        .args(["-m", "cc_check", "COMMIT_EDITMSG"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(entry.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&entry.stdout), "check|COMMIT_EDITMSG|\n");
}
