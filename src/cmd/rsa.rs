use anyhow::{anyhow, Context};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cipher::{
    CipherNumberStream, DefaultRand, PrivateKey, PublicKey, RsaKeyMaterial, SeedRand,
};
use clap::{Args, Subcommand};
use num_bigint::BigUint;
use std::str::FromStr;

#[derive(Args)]
pub struct RsaArgs {
    #[command(subcommand)]
    c: RsaSubArgs,
}

#[derive(Subcommand)]
enum RsaSubArgs {
    #[command(about = "derive (n, phi, e, d) from two primes, or draw demo primes")]
    Keygen {
        #[arg(short, long, help = "first prime, drawn at random when omitted")]
        p: Option<u64>,

        #[arg(short, long, help = "second prime, drawn at random when omitted")]
        q: Option<u64>,

        #[arg(
            long,
            default_value_t = 10000,
            help = "exclusive upper bound for drawn demo primes"
        )]
        limit: u64,

        #[arg(long, help = "seed for reproducible demo prime drawing")]
        seed: Option<u64>,
    },
    #[command(about = "encrypt with the public key (e, n), prints base64 of the number stream")]
    Encrypt {
        #[arg(value_name = "STRING")]
        msg: String,

        #[arg(short, long, help = "public exponent, decimal")]
        e: String,

        #[arg(short, long, help = "modulus, decimal")]
        n: String,
    },
    #[command(about = "decrypt a base64 number stream with the private key (d, n)")]
    Decrypt {
        #[arg(value_name = "BASE64")]
        msg: String,

        #[arg(short, long, help = "private exponent, decimal")]
        d: String,

        #[arg(short, long, help = "modulus, decimal")]
        n: String,
    },
}

fn big(s: &str, name: &str) -> anyhow::Result<BigUint> {
    BigUint::from_str(s).with_context(|| format!("`{}` is not a valid decimal value for {}", s, name))
}

impl RsaArgs {
    pub fn exe(self) -> anyhow::Result<()> {
        match self.c {
            RsaSubArgs::Keygen { p, q, limit, seed } => {
                let material = match (p, q) {
                    (Some(p), Some(q)) => {
                        RsaKeyMaterial::generate(BigUint::from(p), BigUint::from(q))?
                    }
                    (None, None) => {
                        let limit = BigUint::from(limit);
                        match seed {
                            Some(s) => RsaKeyMaterial::generate_demo(&limit, &mut SeedRand::new(s))?,
                            None => {
                                RsaKeyMaterial::generate_demo(&limit, &mut DefaultRand::default())?
                            }
                        }
                    }
                    _ => return Err(anyhow!("give both primes or neither")),
                };

                println!("p   = {}", material.p());
                println!("q   = {}", material.q());
                println!("n   = {}", material.modulus());
                println!("phi = {}", material.totient());
                println!("e   = {}", material.public_exponent());
                println!("d   = {}", material.private_exponent());
            }
            RsaSubArgs::Encrypt { msg, e, n } => {
                let pk = PublicKey::new_uncheck(big(&n, "n")?, big(&e, "e")?);
                let stream = pk.encrypt(&msg)?;
                println!("{}", STANDARD.encode(stream.to_string().as_bytes()));
            }
            RsaSubArgs::Decrypt { msg, d, n } => {
                let sk = PrivateKey::new_uncheck(big(&n, "n")?, big(&d, "d")?);
                let decoded = STANDARD
                    .decode(msg.trim())
                    .context("ciphertext is not valid base64")?;
                let text = String::from_utf8(decoded)
                    .context("ciphertext is not utf-8 after base64 decoding")?;
                let stream = CipherNumberStream::from_str(&text)?;
                println!("{}", sk.decrypt(&stream)?);
            }
        }

        Ok(())
    }
}
