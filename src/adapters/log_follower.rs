//! Polling `tail -f` for a single file.

use std::fs::{self, File, Metadata};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::domain::AppError;

#[derive(Debug, Clone)]
pub struct FollowOptions {
    /// Lines of existing content printed before following.
    pub initial_lines: usize,
    pub poll_interval: Duration,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self { initial_lines: 10, poll_interval: Duration::from_millis(250) }
    }
}

const TAIL_CHUNK: usize = 8 * 1024;

struct Opened {
    file: File,
    meta: Metadata,
    position: u64,
}

/// Stream `path` to `out` until `keep_going` returns false.
///
/// The file may be absent at start, deleted, or replaced while followed. A
/// replaced or shrunken file is streamed again from its beginning.
pub fn follow<W, F>(
    path: &Path,
    out: &mut W,
    options: &FollowOptions,
    mut keep_going: F,
) -> Result<(), AppError>
where
    W: Write,
    F: FnMut() -> bool,
{
    let mut current: Option<Opened> = None;
    let mut seen_file = false;
    let mut announced_missing = false;

    while keep_going() {
        if current.is_none() {
            match File::open(path) {
                Ok(file) => {
                    let meta = file.metadata()?;
                    let position = if seen_file {
                        0
                    } else {
                        write_tail(&file, options.initial_lines, out)?
                    };
                    tracing::debug!(path = %path.display(), position, "following log");
                    seen_file = true;
                    announced_missing = false;
                    current = Some(Opened { file, meta, position });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    if !announced_missing {
                        eprintln!("Waiting for {} to appear...", path.display());
                        announced_missing = true;
                    }
                    seen_file = true;
                    thread::sleep(options.poll_interval);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let lost = match current.as_mut() {
            Some(opened) => match fs::metadata(path) {
                Ok(meta) if same_file(&opened.meta, &meta) && meta.len() >= opened.position => {
                    if meta.len() > opened.position {
                        opened.file.seek(SeekFrom::Start(opened.position))?;
                        let mut appended = Vec::new();
                        (&opened.file).read_to_end(&mut appended)?;
                        out.write_all(&appended)?;
                        out.flush()?;
                        opened.position += appended.len() as u64;
                    }
                    false
                }
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "log replaced or truncated; reopening");
                    true
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "log removed");
                    true
                }
                Err(e) => return Err(e.into()),
            },
            None => false,
        };
        if lost {
            current = None;
        }

        thread::sleep(options.poll_interval);
    }

    Ok(())
}

/// Write the last `lines` lines of `file` to `out`. Returns the file length,
/// where following resumes.
fn write_tail<W: Write>(file: &File, lines: usize, out: &mut W) -> io::Result<u64> {
    let mut reader = file;
    let len = reader.seek(SeekFrom::End(0))?;
    let start = tail_offset(&mut reader, len, lines, TAIL_CHUNK)?;
    reader.seek(SeekFrom::Start(start))?;
    io::copy(&mut reader.take(len - start), out)?;
    out.flush()?;
    Ok(len)
}

/// Offset where the last `lines` lines of the first `len` bytes begin, read
/// backwards in `chunk`-sized pieces. A final newline does not open a line.
fn tail_offset<R: Read + Seek>(
    reader: &mut R,
    len: u64,
    lines: usize,
    chunk: usize,
) -> io::Result<u64> {
    if lines == 0 {
        return Ok(len);
    }
    let mut buf = vec![0; chunk];
    let mut end = len;
    let mut found = 0;
    while end > 0 {
        let size = (chunk as u64).min(end) as usize;
        let start = end - size as u64;
        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(&mut buf[..size])?;
        for (idx, byte) in buf[..size].iter().enumerate().rev() {
            let offset = start + idx as u64;
            if *byte == b'\n' && offset + 1 != len {
                found += 1;
                if found == lines {
                    return Ok(offset + 1);
                }
            }
        }
        end = start;
    }
    Ok(0)
}

#[cfg(unix)]
fn same_file(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_file(_a: &Metadata, _b: &Metadata) -> bool {
    true
}
