//! Reversible token codec: zero-byte run-length compression composed with
//! unpadded URL-safe base64. The host application uses it for opaque
//! tokens whose payloads are mostly sparse binary records, so zero runs
//! dominate and the compression pays for itself.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::error::Error;
use std::fmt;

/// Compresses `bytes` and encodes them as a URL-safe token.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(rle_encode(bytes))
}

/// Decodes a token produced by [`encode`] back into its payload.
pub fn decode(token: &str) -> Result<Vec<u8>, CodecError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(CodecError::InvalidBase64)?;
    Ok(rle_decode(&compressed))
}

// Runs of 0x00 become a (0x00, count) marker. Counts are capped at 255 and
// longer runs split into consecutive markers, so every input round-trips.
fn rle_encode(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut run = 0u8;
    for &byte in bytes {
        if byte == 0 {
            run += 1;
            if run == u8::MAX {
                out.push(0);
                out.push(run);
                run = 0;
            }
        } else {
            if run > 0 {
                out.push(0);
                out.push(run);
                run = 0;
            }
            out.push(byte);
        }
    }
    if run > 0 {
        out.push(0);
        out.push(run);
    }
    out
}

fn rle_decode(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter();
    while let Some(&byte) = iter.next() {
        if byte == 0 {
            match iter.next() {
                Some(&count) => out.resize(out.len() + count as usize, 0),
                // A lone trailing marker reads as a literal zero.
                None => out.push(0),
            }
        } else {
            out.push(byte);
        }
    }
    out
}

#[derive(Debug)]
pub enum CodecError {
    InvalidBase64(base64::DecodeError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidBase64(err) => write!(f, "invalid token base64: {}", err),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::InvalidBase64(err) => Some(err),
        }
    }
}
