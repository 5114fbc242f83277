//! Randomized-offset block verification
//!
//! Confirms two files are byte-identical by reading matching block ranges
//! in a randomly shuffled order, so that neither storage layer benefits
//! from sequential read-ahead, and measures read throughput while doing so.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Instant;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::VerifierConfig;
use crate::error::{VerifyError, VerifyResult};
use crate::stats::ScanReport;

/// Block-aligned offsets covering a file of `size` bytes, in ascending order.
///
/// The final block may be shorter than `block_size`; its offset is still
/// block-aligned. A zero-length file has no offsets.
pub fn block_offsets(size: u64, block_size: usize) -> Vec<u64> {
    let bs = block_size as u64;
    (0..size.div_ceil(bs)).map(|i| i * bs).collect()
}

/// Open a file for the scan, honoring the read-cache hint.
///
/// Cache bypass is a platform capability (macOS `F_NOCACHE`); this build
/// accepts the hint without applying it, keeping the scan loop free of
/// platform conditionals.
fn open_input(path: &Path, disable_read_cache: bool) -> std::io::Result<File> {
    let _ = disable_read_cache;
    File::open(path)
}

/// Compare `reference` and `candidate` block by block in shuffled order.
///
/// Fails fast with [`VerifyError::SizeMismatch`] if the files differ in
/// total length (checked from metadata, before any reads), and with
/// [`VerifyError::ContentMismatch`] on the first block whose bytes differ;
/// the differing byte is not localized within the block. On success the
/// returned [`ScanReport`] covers every byte of the file exactly once.
pub fn verify_files(
    reference: impl AsRef<Path>,
    candidate: impl AsRef<Path>,
    config: &VerifierConfig,
    rng: &mut impl Rng,
) -> VerifyResult<ScanReport> {
    config.validate()?;

    let reference = reference.as_ref();
    let candidate = candidate.as_ref();

    let ref_size = std::fs::metadata(reference)?.len();
    let cand_size = std::fs::metadata(candidate)?.len();
    if ref_size != cand_size {
        return Err(VerifyError::SizeMismatch {
            reference: ref_size,
            candidate: cand_size,
        });
    }

    let mut ref_file = open_input(reference, config.disable_read_cache)?;
    let mut cand_file = open_input(candidate, config.disable_read_cache)?;

    let mut offsets = block_offsets(ref_size, config.block_size);
    offsets.shuffle(rng);
    debug!(
        "comparing {} blocks of {} bytes in shuffled order",
        offsets.len(),
        config.block_size
    );

    let mut ref_buf = vec![0u8; config.block_size];
    let mut cand_buf = vec![0u8; config.block_size];
    let mut bytes_read = 0u64;
    let mut blocks_read = 0u64;

    let start = Instant::now();
    for &offset in &offsets {
        let len = u64::min(config.block_size as u64, ref_size - offset) as usize;

        ref_file.seek(SeekFrom::Start(offset))?;
        ref_file.read_exact(&mut ref_buf[..len])?;
        cand_file.seek(SeekFrom::Start(offset))?;
        cand_file.read_exact(&mut cand_buf[..len])?;

        if ref_buf[..len] != cand_buf[..len] {
            return Err(VerifyError::ContentMismatch {
                bytes_read,
                offset,
                block_size: config.block_size,
            });
        }

        blocks_read += 1;
        bytes_read += len as u64;
    }
    let elapsed = start.elapsed();

    Ok(ScanReport {
        bytes_read,
        blocks_read,
        elapsed,
    })
}
