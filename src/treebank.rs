//! Treebank sources and batch annotation
//!
//! A [`Treebank`] reads bracketed trees from a string, a file or a set of
//! files (plain or gzip-compressed). Annotation runs on a pool of worker
//! threads, one tree per task, and yields trees in input order.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use treeheads::{HeadFinder, Treebank, Variant};
//!
//! let finder = Arc::new(HeadFinder::for_variant(Variant::ModifiedCollins).unwrap());
//! let treebank = Treebank::from_glob("data/*.mrg.gz").unwrap();
//! let count = treebank
//!     .write_annotated(finder, &mut std::io::stdout().lock())
//!     .unwrap();
//! eprintln!("{} trees", count);
//! ```

use flate2::read::MultiGzDecoder;
use pariter::IteratorExt as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::annotate::annotate;
use crate::engine::{HeadError, HeadFinder};
use crate::penn::{TreeParseError, TreeReader};
use crate::tree::Tree;

#[derive(Debug, Error)]
pub enum TreebankError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] TreeParseError),

    #[error("Failed to open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Head(#[from] HeadError),
}

/// Boxed iterator over trees from any source
pub type TreeIter = Box<dyn Iterator<Item = Result<Tree, TreebankError>> + Send>;

#[derive(Debug, Clone)]
enum TreeSource {
    /// In-memory bracketed text
    String(String),
    File(PathBuf),
    Files(Vec<PathBuf>),
}

/// Collection of bracketed trees
#[derive(Debug, Clone)]
pub struct Treebank {
    source: TreeSource,
}

impl Treebank {
    pub fn from_string(text: &str) -> Self {
        Self {
            source: TreeSource::String(text.to_string()),
        }
    }

    /// Single file; `.gz` files are decompressed
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            source: TreeSource::File(path.as_ref().to_path_buf()),
        }
    }

    /// Files matching a glob pattern, in sorted order
    pub fn from_glob(pattern: &str) -> Result<Self, glob::PatternError> {
        let mut file_paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
        file_paths.sort();
        Ok(Self::from_paths(file_paths))
    }

    pub fn from_paths(file_paths: Vec<PathBuf>) -> Self {
        Self {
            source: TreeSource::Files(file_paths),
        }
    }

    /// Parsed trees, errors included
    pub fn trees(&self) -> TreeIter {
        match &self.source {
            TreeSource::String(text) => Box::new(TreeReader::from_str(text).map(|r| r.map_err(TreebankError::from))),
            TreeSource::File(path) => file_trees(path.clone()),
            TreeSource::Files(paths) => Box::new(paths.clone().into_iter().flat_map(file_trees)),
        }
    }

    /// Trees that parsed, with a warning on stderr for each one that did not
    pub fn valid_trees(&self) -> impl Iterator<Item = Tree> + use<> {
        self.trees().filter_map(|result| match result {
            Ok(tree) => Some(tree),
            Err(e) => {
                eprintln!("Warning: skipping input: {}", e);
                None
            }
        })
    }

    /// Annotate every tree in parallel, preserving input order
    pub fn annotated(
        &self,
        finder: Arc<HeadFinder>,
    ) -> impl Iterator<Item = Result<Tree, TreebankError>> + use<> {
        self.trees()
            .parallel_map(move |result| -> Result<Tree, TreebankError> {
                let mut tree = result?;
                annotate(&mut tree, &finder)?;
                Ok(tree)
            })
    }

    /// Write one annotated tree per line; returns the number of trees
    ///
    /// Stops at the first error.
    pub fn write_annotated<W: Write>(
        &self,
        finder: Arc<HeadFinder>,
        writer: &mut W,
    ) -> Result<usize, TreebankError> {
        let mut count = 0;
        for result in self.annotated(finder) {
            let tree = result?;
            writeln!(writer, "{}", tree.to_bracketed())?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }
}

/// Open a plain or gzip-compressed tree file
pub fn open_trees(path: &Path) -> Result<TreeReader<Box<dyn BufRead + Send>>, TreebankError> {
    let file = File::open(path).map_err(|source| TreebankError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader: Box<dyn BufRead + Send> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(TreeReader::new(reader))
}

fn file_trees(path: PathBuf) -> TreeIter {
    match open_trees(&path) {
        Ok(reader) => Box::new(reader.map(|r| r.map_err(TreebankError::from))),
        Err(e) => Box::new(std::iter::once(Err(e))),
    }
}
