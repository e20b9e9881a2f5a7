use anyhow::anyhow;
use cipher::{GridSize, Playfair};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct PlayfairArgs {
    #[command(subcommand)]
    c: PlayfairSubArgs,
}

#[derive(Args, Clone)]
struct GridArgs {
    #[arg(short, long, help = "the key phrase that fills the square")]
    key: String,

    #[arg(short, long, default_value_t = 5, help = "grid dimension, 5 or 6")]
    size: usize,
}

impl GridArgs {
    fn cipher(&self) -> anyhow::Result<Playfair> {
        let size = GridSize::from_dim(self.size)
            .ok_or_else(|| anyhow!("unsupported grid size `{}`, use 5 or 6", self.size))?;

        Ok(Playfair::new(&self.key, size)?)
    }
}

#[derive(Subcommand)]
enum PlayfairSubArgs {
    #[command(about = "print the key square derived from the key phrase")]
    Matrix {
        #[command(flatten)]
        grid: GridArgs,
    },
    #[command(about = "encrypt a message")]
    Encrypt {
        #[arg(value_name = "STRING")]
        msg: String,

        #[command(flatten)]
        grid: GridArgs,
    },
    #[command(about = "decrypt paired ciphertext, inserted fillers are kept verbatim")]
    Decrypt {
        #[arg(value_name = "STRING")]
        msg: String,

        #[command(flatten)]
        grid: GridArgs,
    },
}

impl PlayfairArgs {
    pub fn exe(self) -> anyhow::Result<()> {
        match self.c {
            PlayfairSubArgs::Matrix { grid } => {
                println!("{}", grid.cipher()?.key_square());
            }
            PlayfairSubArgs::Encrypt { msg, grid } => {
                println!("{}", grid.cipher()?.encrypt(&msg)?);
            }
            PlayfairSubArgs::Decrypt { msg, grid } => {
                println!("{}", grid.cipher()?.decrypt(&msg)?);
            }
        }

        Ok(())
    }
}
