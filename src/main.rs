use narrative_dice::{Die, Pool};

fn main() {
    let pool = Pool::new()
        .with(Die::Proficiency, 2)
        .with(Die::Ability, 1)
        .with(Die::Difficulty, 3)
        .with(Die::Force, 1);

    match pool.roll() {
        Ok(outcome) => println!("rolls: {}, result: {}", outcome, outcome.canceled()),
        Err(e) => eprintln!("{e}"),
    }
}
