mod playfair;
pub use playfair::PlayfairArgs;

mod rsa;
pub use rsa::RsaArgs;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cipherlab")]
#[command(version = env!("CIPHERLAB_VERSION_INFO"))]
#[command(about = "Playfair and textbook RSA side by side, demo scale only")]
pub struct Cli {
    #[command(subcommand)]
    c: CipherSubArgs,
}

#[derive(Subcommand)]
enum CipherSubArgs {
    #[command(about = "classical digraph substitution over a key square")]
    Playfair(PlayfairArgs),
    #[command(about = "unpadded per-character RSA with from-scratch key generation")]
    Rsa(RsaArgs),
}

impl Cli {
    pub fn exe(self) -> anyhow::Result<()> {
        match self.c {
            CipherSubArgs::Playfair(a) => a.exe(),
            CipherSubArgs::Rsa(a) => a.exe(),
        }
    }
}
