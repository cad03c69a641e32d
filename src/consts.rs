// src/consts.rs
//! Shared constants: cipher parameters and container layout

/// Pre-shared AES-256 key. Must stay byte-identical to the key compiled into
/// the simulator-side decryptor ("JSBSimAES256Key!FlightDynamics!!").
pub const AES_KEY: [u8; 32] = [
    0x4a, 0x53, 0x42, 0x53, 0x69, 0x6d, 0x41, 0x45, // JSBSimAE
    0x53, 0x32, 0x35, 0x36, 0x4b, 0x65, 0x79, 0x21, // S256Key!
    0x46, 0x6c, 0x69, 0x67, 0x68, 0x74, 0x44, 0x79, // FlightDy
    0x6e, 0x61, 0x6d, 0x69, 0x63, 0x73, 0x21, 0x21, // namics!!
];

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// Length of the raw IV stored at the front of every container
pub const IV_LEN: usize = 16;

/// Smallest input `decrypt_to_vec` will look at: the IV plus one ciphertext byte
pub const MIN_CONTAINER_LEN: usize = IV_LEN + 1;

/// Extension of the plaintext aircraft files
pub const PLAINTEXT_EXTENSION: &str = "xml";

/// Extension written by the encryptor when no output path is given
pub const CONTAINER_EXTENSION: &str = "bin";

/// Suffix the simulator also probes for (`plane.xml` → `plane.xml.enc`)
pub const LEGACY_CONTAINER_SUFFIX: &str = ".enc";
