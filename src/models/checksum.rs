use crate::error::Result;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the MD5 digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; model jars run to gigabytes.
pub fn md5_path(path: &Path) -> Result<String> {
    let mut f = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
