//! # Memory Bus Abstraction
//!
//! The MPU never touches storage itself. It presents an address and a
//! read/write intent every clock, and whoever drives the clock moves the byte.
//! [`MemoryBus`] is that storage contract; [`FlatMemory`] is a plain
//! byte array behind it.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Writes to read-only regions may be ignored
//! - Values are `u8`, so an out-of-range byte cannot be stored

use thiserror::Error;

/// Largest addressable storage (64 KiB).
pub const MAX_SIZE: usize = 0x1_0000;

/// Memory bus trait for reading and writing bytes.
///
/// # Examples
///
/// ```
/// use mc6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mc6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address. Must not panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address. Must not panic.
    fn write(&mut self, addr: u16, value: u8);
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Errors from building or preloading a [`FlatMemory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Requested size is zero or larger than 64 KiB.
    #[error("memory size {0} is outside 1..=65536")]
    InvalidSize(usize),

    /// Image does not fit between the load address and the end of storage.
    #[error("image of {len} bytes at {start:#06X} does not fit in {size} bytes of memory")]
    ImageTooLarge { start: u16, len: usize, size: usize },

    /// Hex text contained something other than a 1-2 digit hex byte.
    #[error("invalid hex byte '{token}' on line {line}")]
    InvalidHexToken { line: usize, token: String },
}

/// Byte-array storage, 64 KiB unless configured smaller.
///
/// Addresses past the configured size mirror back into it.
///
/// # Examples
///
/// ```
/// use mc6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::with_size(0x1000).unwrap();
/// memory.write(0x0010, 0xEA);
/// assert_eq!(memory.read(0x1010), 0xEA); // mirrored
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMemory {
    bytes: Vec<u8>,
}

impl FlatMemory {
    /// Creates 64 KiB of zeroed memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MAX_SIZE],
        }
    }

    /// Creates `size` bytes of zeroed memory.
    pub fn with_size(size: usize) -> Result<Self, MemoryError> {
        if size == 0 || size > MAX_SIZE {
            return Err(MemoryError::InvalidSize(size));
        }
        Ok(Self {
            bytes: vec![0; size],
        })
    }

    /// Creates 64 KiB of memory with `image` placed at address 0.
    pub fn from_image(image: &[u8]) -> Result<Self, MemoryError> {
        let mut memory = Self::new();
        memory.load(0x0000, image)?;
        Ok(memory)
    }

    /// Copies `image` into memory starting at `start`.
    pub fn load(&mut self, start: u16, image: &[u8]) -> Result<(), MemoryError> {
        let begin = start as usize;
        let end = begin + image.len();
        if end > self.bytes.len() {
            return Err(MemoryError::ImageTooLarge {
                start,
                len: image.len(),
                size: self.bytes.len(),
            });
        }
        self.bytes[begin..end].copy_from_slice(image);
        Ok(())
    }

    /// Loads whitespace-separated hex bytes sequentially from address 0.
    ///
    /// Lines whose first non-blank character is `#` are comments. Returns the
    /// number of bytes loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6502::{FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// let count = memory.load_hex("# LDA #$77\nA9 77\n").unwrap();
    /// assert_eq!(count, 2);
    /// assert_eq!(memory.read(0x0001), 0x77);
    /// ```
    pub fn load_hex(&mut self, text: &str) -> Result<usize, MemoryError> {
        let mut image = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            for token in line.split_whitespace() {
                let byte = parse_hex_byte(token).ok_or_else(|| MemoryError::InvalidHexToken {
                    line: index + 1,
                    token: token.to_string(),
                })?;
                image.push(byte);
            }
        }
        self.load(0x0000, &image)?;
        Ok(image.len())
    }

    /// Configured size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn index(&self, addr: u16) -> usize {
        addr as usize % self.bytes.len()
    }
}

fn parse_hex_byte(token: &str) -> Option<u8> {
    if token.len() > 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.bytes[self.index(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        let index = self.index(addr);
        self.bytes[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();
        mem.write(0x0000, 0x11);
        mem.write(0xFFFF, 0x22);
        assert_eq!(mem.read(0x0000), 0x11);
        assert_eq!(mem.read(0xFFFF), 0x22);
        assert_eq!(mem.size(), 0x10000);
    }

    #[test]
    fn test_with_size_bounds() {
        assert_eq!(FlatMemory::with_size(0), Err(MemoryError::InvalidSize(0)));
        assert_eq!(
            FlatMemory::with_size(0x10001),
            Err(MemoryError::InvalidSize(0x10001))
        );
        assert_eq!(FlatMemory::with_size(0x10000).map(|m| m.size()), Ok(0x10000));
    }

    #[test]
    fn test_small_memory_mirrors() {
        let mut mem = FlatMemory::with_size(0x100).unwrap();
        mem.write(0x0142, 0x99);
        assert_eq!(mem.read(0x0042), 0x99);
        assert_eq!(mem.read(0xFF42), 0x99);
    }

    #[test]
    fn test_load_and_from_image() {
        let mem = FlatMemory::from_image(&[0xA9, 0x77]).unwrap();
        assert_eq!(&mem.as_slice()[..3], &[0xA9, 0x77, 0x00]);

        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x00, 0x80]).unwrap();
        assert_eq!(mem.read(0xFFFF), 0x80);
        assert_eq!(
            mem.load(0xFFFF, &[0x00, 0x80]),
            Err(MemoryError::ImageTooLarge {
                start: 0xFFFF,
                len: 2,
                size: 0x10000
            })
        );
    }

    #[test]
    fn test_load_hex_skips_comments() {
        let mut mem = FlatMemory::new();
        let text = "# program\nee 55 22\n  # indented comment\n\n4c 0 2\n";
        assert_eq!(mem.load_hex(text), Ok(6));
        assert_eq!(&mem.as_slice()[..6], &[0xEE, 0x55, 0x22, 0x4C, 0x00, 0x02]);
    }

    #[test]
    fn test_load_hex_rejects_bad_tokens() {
        let mut mem = FlatMemory::new();
        let err = mem.load_hex("A9 77\nA9 GG\n").unwrap_err();
        assert_eq!(
            err,
            MemoryError::InvalidHexToken {
                line: 2,
                token: "GG".to_string()
            }
        );
        assert!(mem.load_hex("123").is_err());
    }
}
