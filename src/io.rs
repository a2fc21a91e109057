//! Reading and writing adjacency matrices.
//!
//! The text format is a stream of whitespace-separated integers: first the number of
//! vertices $n$, followed by the $n^2$ entries of the matrix in row-major order. Line
//! breaks carry no meaning, so the usual layout
//! ```text
//! 4
//! 0 1 0 1
//! 1 0 1 0
//! 0 1 0 1
//! 1 0 1 0
//! ```
//! and a single line `4 0 1 0 1 1 0 1 0 ...` describe the same graph. Files ending in
//! `.gz` are read and written gzip-compressed.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::fs::File;
use std::path::Path;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use itertools::Itertools;

use crate::error::{BipartiteError, Result};
use crate::graph::*;

pub trait WriteToFile {
    fn write_txt(&self, filename:&str) -> Result<()> {
        let file = File::create(filename)?;
        let buf = BufWriter::new(file);
        self.write_buf(Box::new(buf))
    }

    fn write_gzipped(&self, filename:&str) -> Result<()> {
        let file = File::create(filename)?;
        let gz = GzEncoder::new(file, Compression::default());
        let buf = BufWriter::new(gz);
        self.write_buf(Box::new(buf))
    }

    fn write_buf(&self, buf:Box<dyn Write>) -> Result<()>;
}

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Picks the reader by file extension, `.txt` or `.gz`.
    fn from_file(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized;
}

/// Pulls integer tokens from a reader one line at a time, so that interactive
/// callers can prompt between reading the size and the entries.
pub struct MatrixReader<R: BufRead> {
    reader: R,
    pending: Vec<String>,
    lineno: usize
}

impl<R: BufRead> MatrixReader<R> {
    pub fn new(reader:R) -> Self {
        MatrixReader { reader, pending: Vec::new(), lineno: 0 }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None)
            }
            self.lineno += 1;
            // Stored reversed so that tokens can be popped in order
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }

    fn next_int(&mut self, what:&str) -> Result<i64> {
        match self.next_token()? {
            Some(token) => parse_int(&token, self.lineno),
            None => Err(BipartiteError::InvalidInput(format!("Unexpected end of input, expected {what}")))
        }
    }

    /// Reads the number of vertices. Sizes whose $n^2$ entries cannot be
    /// addressed are rejected.
    pub fn read_size(&mut self) -> Result<usize> {
        let n = self.next_int("the number of vertices")?;
        let n = usize::try_from(n).map_err(|_|
            BipartiteError::InvalidInput(format!("Number of vertices must not be negative, got {n}")))?;
        if n.checked_mul(n).is_none() {
            return Err(BipartiteError::InvalidInput(format!("Number of vertices {n} is too large")))
        }
        Ok(n)
    }

    /// Reads the $n^2$ entries of the matrix. Rows grow as tokens arrive, so a
    /// declared size is never trusted for allocation.
    pub fn read_entries(&mut self, n:usize) -> Result<AdjacencyMatrix> {
        let mut rows = Vec::new();
        for u in 0..n {
            let mut row = Vec::new();
            for v in 0..n {
                row.push(self.next_int(&format!("entry ({u}, {v})"))?);
            }
            rows.push(row);
        }
        AdjacencyMatrix::from_rows(&rows)
    }

    /// Fails if any tokens are left in the input.
    pub fn expect_end(&mut self) -> Result<()> {
        match self.next_token()? {
            Some(token) => Err(BipartiteError::InvalidInput(
                format!("Unexpected token {token} at input line {}", self.lineno))),
            None => Ok(())
        }
    }
}

impl LoadFromFile for AdjacencyMatrix {
    /// Loads a matrix in the format described in [crate::io].
    ///
    /// ```rust
    /// use std::io::Cursor;
    /// use bigraph::graph::AdjacencyMatrix;
    /// use bigraph::io::LoadFromFile;
    ///
    /// let input = Cursor::new("3\n0 1 0\n1 0 1\n0 1 0\n");
    /// let graph = AdjacencyMatrix::from_buf(Box::new(input)).unwrap();
    /// assert_eq!(graph, AdjacencyMatrix::path(3));
    /// ```
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized {
        let mut reader = MatrixReader::new(buf);
        let n = reader.read_size()?;
        let res = reader.read_entries(n)?;
        reader.expect_end()?;
        Ok(res)
    }
}

impl WriteToFile for AdjacencyMatrix {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> Result<()> {
        buf.write_all(format!("{}\n", self.num_vertices()).as_bytes())?;
        for u in self.vertices() {
            let line = self.row(u).iter().map(|&x| u8::from(x)).join(" ");
            buf.write_all(format!("{line}\n").as_bytes())?;
        }
        buf.flush()?;

        Ok(())
    }
}

fn open_reader(filename:&str) -> Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let extension = path.extension().and_then(OsStr::to_str);
    let reader:Box<dyn BufRead> = match extension {
        Some("txt") => {
            let file = File::open(path)?;
            Box::new(BufReader::new(file))
        }
        Some("gz") => {
            let file = File::open(path)?;
            let gz = GzDecoder::new(file);
            Box::new(BufReader::new(gz))
        }
        _ => {
            return Err(BipartiteError::InvalidInput(
                format!("Invalid file `{filename:?}`. The supported formats are `.txt` and `.gz`.")));
        }
    };
    Ok(reader)
}

fn open_reader_txt(filename:&str) -> Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let file = File::open(path)?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}

fn parse_int(s: &str, lineno:usize) -> Result<i64> {
    match s.parse::<i64>() {
        Ok(x) => Ok(x),
        Err(_) => Err(BipartiteError::InvalidInput(
                format!("Cannot parse integer {} at input line {}", s, lineno)))
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
