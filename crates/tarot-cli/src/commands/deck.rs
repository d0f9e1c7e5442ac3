use super::{GlobalOpts, open_session};

pub fn run(opts: &GlobalOpts) -> Result<(), String> {
    let session = open_session(opts);
    for (i, card) in session.deck().cards().iter().enumerate() {
        println!("{:>2}  {card}", i + 1);
    }
    Ok(())
}
