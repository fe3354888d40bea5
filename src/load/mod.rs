use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use snafu::ResultExt;

use crate::ast::Document;
use crate::syn::Parser;

type Result<T> = std::result::Result<T, error::Error>;

/// Parse a document from any reader. The whole stream is read up front and
/// then fed through the same line-oriented state machine as [`crate::from_str`].
pub fn read<R: Read>(reader: &mut R) -> Result<Document> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context(error::ReadSnafu)?;
    Parser::new(&text).parse().context(error::ParseSnafu)
}

/// Parse a document from a file on disk. Failure to open the path is
/// reported as an I/O error, distinct from any syntax error in its contents.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let mut file = File::open(path).context(error::OpenSnafu { path })?;
    read(&mut file)
}

/// Render a document as INI text into any writer
pub fn write<W: Write>(document: &Document, writer: &mut W) -> Result<()> {
    writer
        .write_all(document.to_string().as_bytes())
        .context(error::WriteSnafu)
}

/// Render a document as INI text into a file, replacing any existing
/// contents. The file handle is scoped to this call and closed on every
/// path out of it.
pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).context(error::CreateSnafu { path })?;
    write(document, &mut file)
}

pub(crate) mod error {
    use std::path::PathBuf;

    use snafu::Snafu;

    /// Errors raised by the file and stream entry points. Syntax failures
    /// are wrapped so callers can still tell them apart from I/O failures.
    #[derive(Snafu, Debug)]
    #[snafu(visibility(pub(crate)))]
    pub enum Error {
        #[snafu(display("could not open '{}': {source}", path.display()))]
        Open {
            path: PathBuf,
            source: std::io::Error,
        },
        #[snafu(display("could not create '{}': {source}", path.display()))]
        Create {
            path: PathBuf,
            source: std::io::Error,
        },
        #[snafu(display("io error while reading: {source}"))]
        Read { source: std::io::Error },
        #[snafu(display("io error while writing: {source}"))]
        Write { source: std::io::Error },
        #[snafu(display("{source}"))]
        Parse { source: crate::syn::error::Error },
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::{env, fs, process};

    use assert_matches::assert_matches;

    use super::{error::Error, read, read_file, write_file};
    use crate::syn::error::Error as ParseError;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("inikit-{}-{name}", process::id()))
    }

    #[test]
    fn read_from_reader() {
        let mut cursor = Cursor::new(b"[Profile]\nname = jarvis\n");
        let doc = read(&mut cursor).unwrap();
        assert_eq!(doc.get("Profile", "name"), Some("jarvis"));
    }

    #[test]
    fn syntax_errors_stay_distinguishable() {
        let mut cursor = Cursor::new(b"name = jarvis\n");
        assert_matches!(
            read(&mut cursor),
            Err(Error::Parse {
                source: ParseError::NoSection { line: 1 }
            })
        );
    }

    #[test]
    fn missing_file() {
        assert_matches!(
            read_file(scratch_path("does-not-exist.ini")),
            Err(Error::Open { .. })
        );
    }

    #[test]
    fn unwritable_destination() {
        // A directory cannot be created as a file
        let doc = crate::from_str("[A]\nk = v\n").unwrap();
        assert_matches!(write_file(&doc, env::temp_dir()), Err(Error::Create { .. }));
    }

    #[test]
    fn file_round_trip() {
        let path = scratch_path("round-trip.ini");
        let doc = crate::from_str(
            "[Profile]\nname = jarvis\npassword = secret\n\n[Deployment]\nregion = us-west-2\n",
        )
        .unwrap();
        write_file(&doc, &path).unwrap();
        let reloaded = read_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(doc, reloaded);
    }
}
