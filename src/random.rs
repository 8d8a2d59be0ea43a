use rand::{seq::SliceRandom, Rng, SeedableRng};
use crate::{input::Command, model::MenuItem};


// Random generation of one quantity click, biased towards adding
fn random_click(rng: &mut impl Rng, menu: &[MenuItem]) -> Option<Command> {
    let item = menu.choose(rng)?;
    match rng.gen_range(0..3) {
        0 | 1 => Some(Command::Increment(item.id)),
        2 => Some(Command::Decrement(item.id)),
        _ => unreachable!(),
    }
}


// Generate a reproducible sequence of +/- clicks over the menu
pub fn generator_clicks(menu: &[MenuItem], n: usize, seed: u64) -> Vec<Command> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n).filter_map(|_| random_click(&mut rng, menu)).collect()
}
