use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::RawFd;
use std::path::PathBuf;

use super::scan::{self, Scan, Split};

const CREATE_MODE: u32 = 0o644;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// `<`
    Read,
    /// `>`
    Truncate,
    /// `>>`
    Append,
    /// `<>`
    ReadWrite,
}

impl RedirectMode {
    pub fn default_fd(self) -> RawFd {
        match self {
            RedirectMode::Read | RedirectMode::ReadWrite => libc::STDIN_FILENO,
            RedirectMode::Truncate | RedirectMode::Append => libc::STDOUT_FILENO,
        }
    }

    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            RedirectMode::Read => options.read(true),
            RedirectMode::Truncate => options.write(true).create(true).truncate(true),
            RedirectMode::Append => options.append(true).create(true),
            RedirectMode::ReadWrite => options.read(true).write(true).create(true),
        };
        options.mode(CREATE_MODE);
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Path(PathBuf),
    /// `&-`: close the destination descriptor.
    Close,
    /// `&n`: duplicate descriptor `n` onto the destination.
    ///
    /// Redirections on one command are applied right to left, so `n` must
    /// already be open when this one runs: `cmd >&3 3>f` writes to `f`,
    /// while `cmd 3>f >&3` fails because fd 3 is not open yet.
    Duplicate(RawFd),
}

impl RedirectTarget {
    pub fn parse(text: &str) -> Self {
        let moved = text.strip_prefix('&');
        match moved.unwrap_or(text) {
            "-" => RedirectTarget::Close,
            digits if moved.is_some() && is_descriptor(digits) => match digits.parse() {
                Ok(fd) => RedirectTarget::Duplicate(fd),
                Err(_) => RedirectTarget::Path(PathBuf::from(text)),
            },
            _ => RedirectTarget::Path(PathBuf::from(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub mode: RedirectMode,
    pub dest_fd: RawFd,
    pub target: RedirectTarget,
}

fn is_descriptor(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Finds the rightmost top-level redirection and splits `text` into the
/// command it applies to and the resolved redirection.
pub fn split_redirect(text: &str) -> Option<(&str, Redirect)> {
    let mut mode = RedirectMode::Read;
    let split = scan::last_top_level(text, |bytes, i| match bytes[i] {
        b'<' => {
            mode = RedirectMode::Read;
            Scan::Found(Split { at: i, len: 1 })
        }
        b'>' if i > 0 && bytes[i - 1] == b'>' => {
            mode = RedirectMode::Append;
            Scan::Found(Split { at: i - 1, len: 2 })
        }
        b'>' if i > 0 && bytes[i - 1] == b'<' => {
            mode = RedirectMode::ReadWrite;
            Scan::Found(Split { at: i - 1, len: 2 })
        }
        b'>' => {
            mode = RedirectMode::Truncate;
            Scan::Found(Split { at: i, len: 1 })
        }
        _ => Scan::Continue,
    })?;

    let target = RedirectTarget::parse(split.right(text).trim());
    let (command, dest_fd) =
        explicit_descriptor(split.left(text)).unwrap_or((split.left(text), mode.default_fd()));

    Some((
        command,
        Redirect {
            mode,
            dest_fd,
            target,
        },
    ))
}

/// `cmd 2` before an operator selects descriptor 2, provided the digits
/// start a word of their own.
fn explicit_descriptor(before: &str) -> Option<(&str, RawFd)> {
    let digits_start = before
        .bytes()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let digits = &before[digits_start..];
    if digits.is_empty() {
        return None;
    }
    let standalone = before[..digits_start]
        .bytes()
        .last()
        .map_or(true, |b| b.is_ascii_whitespace());
    if !standalone {
        return None;
    }
    let fd = digits.parse().ok()?;
    Some((&before[..digits_start], fd))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(text: &str) -> (&str, Redirect) {
        split_redirect(text).unwrap()
    }

    #[test]
    fn test_operator_defaults() {
        let (cmd, r) = redirect("cat < in.txt");
        assert_eq!(cmd, "cat ");
        assert_eq!(r.mode, RedirectMode::Read);
        assert_eq!(r.dest_fd, 0);
        assert_eq!(r.target, RedirectTarget::Path(PathBuf::from("in.txt")));

        let (_, r) = redirect("echo hi > out");
        assert_eq!((r.mode, r.dest_fd), (RedirectMode::Truncate, 1));

        let (cmd, r) = redirect("echo hi >> out");
        assert_eq!(cmd, "echo hi ");
        assert_eq!((r.mode, r.dest_fd), (RedirectMode::Append, 1));

        let (cmd, r) = redirect("cat <> rw");
        assert_eq!(cmd, "cat ");
        assert_eq!((r.mode, r.dest_fd), (RedirectMode::ReadWrite, 0));
    }

    #[test]
    fn test_explicit_descriptor() {
        let (cmd, r) = redirect("ls /nope 2> err");
        assert_eq!(cmd, "ls /nope ");
        assert_eq!(r.dest_fd, 2);

        let (cmd, r) = redirect("10>>log");
        assert_eq!(cmd, "");
        assert_eq!((r.mode, r.dest_fd), (RedirectMode::Append, 10));
    }

    #[test]
    fn test_digits_glued_to_word_are_arguments() {
        let (cmd, r) = redirect("echo file2> out");
        assert_eq!(cmd, "echo file2");
        assert_eq!(r.dest_fd, 1);
    }

    #[test]
    fn test_rightmost_redirection_is_outermost() {
        let (cmd, r) = redirect("cat < in > out");
        assert_eq!(cmd, "cat < in ");
        assert_eq!(r.mode, RedirectMode::Truncate);
        assert_eq!(r.target, RedirectTarget::Path(PathBuf::from("out")));
    }

    #[test]
    fn test_nested_redirection_ignored() {
        let (cmd, r) = redirect("(echo a > inner) > outer");
        assert_eq!(cmd, "(echo a > inner) ");
        assert_eq!(r.target, RedirectTarget::Path(PathBuf::from("outer")));
        assert!(split_redirect("(echo a > inner)").is_none());
    }

    #[test]
    fn test_descriptor_targets() {
        let (_, r) = redirect("cmd 2>&-");
        assert_eq!((r.dest_fd, r.target), (2, RedirectTarget::Close));

        let (_, r) = redirect("cmd <-");
        assert_eq!((r.dest_fd, r.target), (0, RedirectTarget::Close));

        let (_, r) = redirect("cmd 2>&1");
        assert_eq!((r.dest_fd, r.target), (2, RedirectTarget::Duplicate(1)));

        let (_, r) = redirect("cmd >&name");
        assert_eq!(r.target, RedirectTarget::Path(PathBuf::from("&name")));
    }

    #[test]
    fn test_missing_target_is_empty_path() {
        let (_, r) = redirect("echo >");
        assert_eq!(r.target, RedirectTarget::Path(PathBuf::new()));
    }
}
