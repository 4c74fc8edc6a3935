use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Template used by command tests. References only placeholders both
/// question catalogs can fill.
pub(crate) const TEMPLATE: &str = "\\documentclass{article}\n\
                                   \\begin{document}\n\
                                   @AssessmentType@: @Name@ (@ID@)\n\n\
                                   @Q1@\n\n\
                                   @Q10@\n\
                                   \\end{document}\n";

/// Two-record roster with a header row and one quoted name.
pub(crate) const ROSTER: &str = "ID,Name\n12345,Alice Smith\n67890,\"O'Connor, Ryan\"\n";

/// Stand-in compiler that produces the expected PDF, invoked as
/// `sh stub_compiler.sh <file>.tex`.
pub(crate) const SUCCESS_COMPILER: &str = "cp \"$1\" \"${1%.tex}.pdf\"\n";

/// Stand-in compiler that prints a diagnostic and fails without a PDF.
pub(crate) const FAILING_COMPILER: &str = "echo '! LaTeX Error: something broke.'\nexit 1\n";

pub(crate) fn write_batch_fixture(dir: &Path, compiler_script: &str) -> PathBuf {
    write_batch_fixture_with(dir, compiler_script, TEMPLATE, ROSTER, "")
}

/// Write a full batch fixture (template, roster, stub compiler, config)
/// into `dir` and return the config path. `extra_config` is appended to
/// the generated YAML for settings the defaults don't cover.
pub(crate) fn write_batch_fixture_with(
    dir: &Path,
    compiler_script: &str,
    template: &str,
    roster: &str,
    extra_config: &str,
) -> PathBuf {
    std::fs::write(dir.join("template.tex"), template).unwrap();
    std::fs::write(dir.join("roster.csv"), roster).unwrap();

    let stub = dir.join("stub_compiler.sh");
    std::fs::write(&stub, compiler_script).unwrap();

    let config = format!(
        "assessment_type: Test Run\n\
         template: template.tex\n\
         roster: roster.csv\n\
         output_dir: out\n\
         compiler: sh {}\n\
         compile_attempts: 1\n\
         poll_budget: 2\n\
         {}",
        stub.display(),
        extra_config
    );
    let config_path = dir.join("papermill.yaml");
    std::fs::write(&config_path, config).unwrap();
    config_path
}
