use tarot_core::{CARD_BACK, Card};

use super::{GlobalOpts, describe_asset, open_session};

pub fn run(opts: &GlobalOpts, identifier: &str) -> Result<(), String> {
    let session = open_session(opts);

    let asset = if identifier.eq_ignore_ascii_case(CARD_BACK) {
        session.resolver().card_back()
    } else {
        let card = identifier.parse::<Card>().map_err(|e| e.to_string())?;
        session.resolver().resolve_card(&card)
    };

    println!("{}", describe_asset(&asset));
    Ok(())
}
