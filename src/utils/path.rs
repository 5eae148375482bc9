use std::path::{Component, Path, PathBuf};
use uzers::os::unix::UserExt;

/// Expand tilde (~) in configured directory paths.
///
/// Supports:
/// - `~` or `~/path` - expands to current user's home directory
/// - `~username/path` - expands to the specified user's home directory
///
/// # Examples
///
/// ```
/// use slashcmd::utils::path::expand_tilde;
///
/// let path = expand_tilde("~/.slashcmd/commands").unwrap();
/// assert!(path.ends_with(".slashcmd/commands"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(PathBuf::from(home).join(after_tilde.trim_start_matches('/')));
    }

    let username_end = after_tilde.find('/').unwrap_or(after_tilde.len());
    let username = &after_tilde[..username_end];
    let rest = after_tilde[username_end..].trim_start_matches('/');

    let user = uzers::get_user_by_name(username)?;
    Some(user.home_dir().join(rest))
}

/// Lexically normalize a path: drop `.` segments, collapse redundant
/// separators and resolve `..` against preceding segments.
///
/// Does not touch the filesystem, so symlinks are not followed. `..` at the
/// root of an absolute path is discarded; on a relative path it is kept.
pub fn clean_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut cleaned: Vec<Component<'_>> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.is_empty() {
        return PathBuf::from(".");
    }

    cleaned.iter().collect()
}

/// Make `path` absolute against the current directory, then clean it.
pub fn absolutize<P: AsRef<Path>>(path: P) -> std::io::Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    Ok(clean_path(std::env::current_dir()?.join(path)))
}
