/// Skip a test if the gpg binary is not installed.
#[macro_export]
macro_rules! skip_without_gpg {
    () => {
        if which::which("gpg").is_err() {
            eprintln!("SKIPPED: gpg not installed");
            return;
        }
    };
}

/// Skip a test if the git binary is not installed.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        if which::which("git").is_err() {
            eprintln!("SKIPPED: git not installed");
            return;
        }
    };
}
