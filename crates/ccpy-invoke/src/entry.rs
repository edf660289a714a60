//! ---
//! ccpy_section: "02-invocation"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Keyword flag model and cc-check invocation."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::io::Write;
use std::path::Path;

use crate::{check, Flags, Result};

/// Minimal dispatcher mirroring `python -m cc_check`.
///
/// The first argument, if any, is the commit message file. Captured streams are
/// forwarded with a trailing newline when non-empty. Returns the process exit code.
pub fn run_entry<P, O, E>(package_dir: P, args: &[String], out: &mut O, err: &mut E) -> Result<i32>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let commit_file = args.first().map(String::as_str);
    let outcome = check(package_dir, commit_file, &Flags::new())?;
    if !outcome.stdout.is_empty() {
        writeln!(out, "{}", outcome.stdout)?;
    }
    if !outcome.stderr.is_empty() {
        writeln!(err, "{}", outcome.stderr)?;
    }
    Ok(if outcome.success { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvokeError;

    #[test]
    fn resolver_errors_propagate() {
        if ccpy_platform::Target::host().is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = run_entry(dir.path(), &[], &mut out, &mut err);
        assert!(matches!(result, Err(InvokeError::Platform(_))));
        assert!(out.is_empty() && err.is_empty());
    }

    #[cfg(unix)]
    mod subprocess {
        use super::*;
        use crate::test_support::{install_fake_binary, spawn_guard};

        #[test]
        fn forwards_first_argument_and_exits_zero() {
            let _guard = spawn_guard();
            let dir = tempfile::tempdir().unwrap();
            install_fake_binary(dir.path(), r#"printf '%s ' "$@""#);
            let (mut out, mut err) = (Vec::new(), Vec::new());
            let args = vec!["COMMIT_EDITMSG".to_owned(), "ignored".to_owned()];
            let code = run_entry(dir.path(), &args, &mut out, &mut err).unwrap();
            assert_eq!(code, 0);
            assert_eq!(String::from_utf8(out).unwrap(), "check COMMIT_EDITMSG \n");
            assert!(err.is_empty());
        }

        #[test]
        fn failure_maps_to_exit_one() {
            let _guard = spawn_guard();
            let dir = tempfile::tempdir().unwrap();
            install_fake_binary(
                dir.path(),
                "echo 'Conventional commit check failed: empty commit message' >&2; exit 1",
            );
            let (mut out, mut err) = (Vec::new(), Vec::new());
            let code = run_entry(dir.path(), &[], &mut out, &mut err).unwrap();
            assert_eq!(code, 1);
            assert!(out.is_empty());
            assert_eq!(
                String::from_utf8(err).unwrap(),
                "Conventional commit check failed: empty commit message\n\n"
            );
        }
    }
}
