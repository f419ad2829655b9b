use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const ROOT_OBJECT_ID: u32 = 1;

/// Object id -> full path (relative to the extraction root).
#[derive(Clone, Debug)]
pub struct ObjectTable {
    paths: Vec<Option<PathBuf>>,
}

impl ObjectTable {
    /// Table for ids `0..capacity`, with the root object registered as ".".
    pub fn new(capacity: u32) -> Self {
        let mut paths = vec![None; capacity as usize];
        if let Some(root) = paths.get_mut(ROOT_OBJECT_ID as usize) {
            *root = Some(PathBuf::from("."));
        }
        Self { paths }
    }

    pub fn capacity(&self) -> u32 {
        self.paths.len() as u32
    }

    pub fn in_range(&self, id: u32) -> bool {
        (id as usize) < self.paths.len()
    }

    pub fn get(&self, id: u32) -> Option<&Path> {
        self.paths.get(id as usize)?.as_deref()
    }

    /// Registers `path` for `id`, replacing any earlier entry.
    /// Callers check `in_range` first.
    pub fn insert(&mut self, id: u32, path: PathBuf) -> Option<PathBuf> {
        self.paths[id as usize].replace(path)
    }

}

/// `parent + "/" + name`. The name is appended verbatim, never interpreted as
/// an absolute path. Names are not sanitized: `..` or `../x` resolve above the
/// parent.
pub fn child_path(parent: &Path, name: &[u8]) -> Result<PathBuf> {
    let name = crate::util::cstr::os_string(name);
    let parent = parent.as_os_str();
    let mut full = OsString::new();
    full.try_reserve_exact(parent.len() + 1 + name.len())?;
    full.push(parent);
    full.push("/");
    full.push(&name);
    Ok(PathBuf::from(full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_preseeded() {
        let t = ObjectTable::new(10000);
        assert_eq!(t.get(ROOT_OBJECT_ID), Some(Path::new(".")));
        assert_eq!(t.get(0), None);
        assert_eq!((0..t.capacity()).filter_map(|id| t.get(id)).count(), 1);
        assert_eq!(t.capacity(), 10000);
    }

    #[test]
    fn bounds() {
        let t = ObjectTable::new(100);
        assert!(t.in_range(99));
        assert!(!t.in_range(100));
        assert_eq!(t.get(100), None);
    }

    #[test]
    fn reinsert_overwrites() {
        let mut t = ObjectTable::new(10);
        assert!(t.insert(5, PathBuf::from("./a")).is_none());
        let old = t.insert(5, PathBuf::from("./b"));
        assert_eq!(old, Some(PathBuf::from("./a")));
        assert_eq!(t.get(5), Some(Path::new("./b")));
    }

    #[test]
    fn child_path_joins_with_slash() {
        let p = child_path(Path::new("./system"), b"bin").unwrap();
        assert_eq!(p, PathBuf::from("./system/bin"));
    }

    #[test]
    fn child_path_keeps_dot_dot_names() {
        let p = child_path(Path::new("./a"), b"..").unwrap();
        assert_eq!(p.as_os_str(), "./a/..");
    }

    #[test]
    fn child_path_does_not_reset_on_leading_slash() {
        let p = child_path(Path::new("."), b"/etc").unwrap();
        assert_eq!(p.as_os_str(), ".//etc");
    }
}
