pub trait Rand {
    fn rand(&mut self, random: &mut [u8]);
}

mod default_rand;
pub use default_rand::DefaultRand;

mod seed_rand;
pub use seed_rand::SeedRand;
