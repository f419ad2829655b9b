use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use super::assemble::FileAssembler;
use super::chunk::ChunkReader;
use crate::container::header::{ObjectHeader, ObjectType};
use crate::container::tags::PackedTags;
use crate::error::{Result, YaffsError};
use crate::index::objtab::{ObjectTable, child_path};
use crate::sink::EntrySink;
use crate::stats::ExtractStats;
use crate::util::cstr::os_string;

/// Turns header chunks into filesystem entries. Parents and hardlink targets
/// must already be registered; there is no deferral of forward references.
pub struct ObjectReconstructor<S: EntrySink> {
    table: ObjectTable,
    sink: S,
    stats: ExtractStats,
}

fn create_err(path: &Path) -> impl FnOnce(std::io::Error) -> YaffsError + '_ {
    move |source| YaffsError::Create {
        path: path.to_path_buf(),
        source,
    }
}

impl<S: EntrySink> ObjectReconstructor<S> {
    pub fn new(sink: S, max_objects: u32) -> Self {
        Self {
            table: ObjectTable::new(max_objects),
            sink,
            stats: ExtractStats::default(),
        }
    }

    pub fn table(&self) -> &ObjectTable {
        &self.table
    }

    pub fn into_parts(self) -> (S, ExtractStats) {
        (self.sink, self.stats)
    }

    /// Registers the object and creates its entry. File objects consume their
    /// continuation chunks from `reader` before this returns.
    pub fn apply<R: Read>(
        &mut self,
        tags: &PackedTags,
        header: &ObjectHeader,
        reader: &mut ChunkReader<R>,
    ) -> Result<PathBuf> {
        let id = tags.object_id;
        if !self.table.in_range(id) {
            return Err(YaffsError::OutOfRangeObjectId {
                id,
                name: header.display_name().into_owned(),
            });
        }
        let parent = header.parent_object_id;
        let Some(parent_path) = self.table.get(parent) else {
            return Err(YaffsError::InvalidParentId {
                parent,
                id,
                name: header.display_name().into_owned(),
            });
        };

        let path = child_path(parent_path, &header.name)?;
        if let Some(old) = self.table.insert(id, path.clone()) {
            tracing::debug!("object {id} re-registered: {} -> {}", old.display(), path.display());
        }
        tracing::debug!(
            "object {id} {:?} parent={parent} mode={:o} uid={} gid={} mtime={} {}",
            header.object_type,
            header.mode,
            header.uid,
            header.gid,
            header.mtime,
            path.display()
        );

        match header.object_type {
            ObjectType::File => {
                let out = self
                    .sink
                    .create_file(&path, header.mode)
                    .map_err(create_err(&path))?;
                if header.file_size > 0 {
                    let n = FileAssembler::new(BufWriter::new(out), header.file_size)
                        .run(reader, id, &path)?;
                    self.stats.file_bytes += n;
                }
                self.stats.files += 1;
            }
            ObjectType::Symlink => {
                let target = PathBuf::from(os_string(&header.alias));
                self.sink
                    .symlink(&target, &path)
                    .map_err(create_err(&path))?;
                self.stats.symlinks += 1;
            }
            ObjectType::Directory => {
                self.sink.create_dir(&path).map_err(create_err(&path))?;
                self.stats.dirs += 1;
            }
            ObjectType::Hardlink => {
                let equivalent = header.equivalent_object_id;
                let Some(original) = self.table.get(equivalent) else {
                    return Err(YaffsError::InvalidEquivalentId {
                        equivalent,
                        id,
                        name: header.display_name().into_owned(),
                    });
                };
                self.sink
                    .hard_link(original, &path)
                    .map_err(create_err(&path))?;
                self.stats.hardlinks += 1;
            }
            ObjectType::Special | ObjectType::Unknown => {
                // registered so children and hardlinks can still refer to it
                tracing::debug!("object {id} type {} not created", header.raw_type);
                self.stats.specials += 1;
            }
        }
        Ok(path)
    }
}
