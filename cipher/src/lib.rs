mod error;
pub use error::CipherError;

pub use rand::{DefaultRand, Rand, SeedRand};

pub mod playfair;
pub use playfair::{GridSize, KeySquare, Playfair};

pub mod rsa;
pub use rsa::{CipherNumberStream, PrivateKey, PublicKey, RsaKeyMaterial};
