//! File I/O for Synacor bytecode images.
//!
//! An image is a bare sequence of little endian 16 bit words: byte `2i` is
//! the low byte of word `i`, byte `2i + 1` the high byte. There is no
//! header, magic number or checksum; the whole file loads into the heap
//! starting at address zero.

use byteorder::ByteOrder;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use util::Endian;

#[derive(Debug, PartialEq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn from(bytes: Vec<u8>) -> Image {
        Image { bytes }
    }

    pub fn copy_from(bytes: &[u8]) -> Image {
        Image {
            bytes: Vec::from(bytes),
        }
    }

    /// Builds an image from 16 bit words, encoding each little endian.
    ///
    /// # Examples
    /// ```
    /// use synimg::Image;
    ///
    /// assert_eq!(Image::from_words(&[0x1234]).bytes(), &[0x34, 0x12]);
    /// ```
    pub fn from_words(words: &[u16]) -> Image {
        let mut bytes = vec![0u8; words.len() * 2];
        Endian::write_u16_into(words, &mut bytes);
        Image { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of heap words the image occupies; a trailing odd byte still
    /// fills a word.
    pub fn word_count(&self) -> usize {
        (self.bytes.len() + 1) / 2
    }
}

pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Image::from(bytes))
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> std::io::Result<()> {
    writer.write_all(&image.bytes[..])
}

pub trait ReadImageExt: Read + Sized {
    fn read_image(&mut self) -> std::io::Result<Image> {
        read(self)
    }
}

impl<R: Read + Sized> ReadImageExt for R {}

pub trait WriteImageExt: Write + Sized {
    fn write_image(&mut self, image: &Image) -> std::io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteImageExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Image> {
    BufReader::new(File::open(path)?).read_image()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_image(image)?;
    writer.flush()
}
