use colored::Colorize;

use tarot_core::Orientation;

use super::{GlobalOpts, describe_asset, open_session};

pub fn run(opts: &GlobalOpts, spread_name: &str, save: bool) -> Result<(), String> {
    let mut session = open_session(opts);
    let spread = session.spread(spread_name).map_err(|e| e.to_string())?.clone();
    let (reading, saved) = if save {
        session
            .draw_and_record(spread_name)
            .map_err(|e| e.to_string())?
    } else {
        let reading = session.draw(spread_name).map_err(|e| e.to_string())?;
        (reading, Ok(()))
    };

    println!("  {}\n", spread.name().bold());
    for (i, (label, drawn)) in reading.positions(&spread).into_iter().enumerate() {
        let revealed = session.reveal(drawn);
        let orientation = match drawn.orientation {
            Orientation::Upright => drawn.orientation.to_string().green(),
            Orientation::Reversed => drawn.orientation.to_string().yellow(),
        };
        println!(
            "  {}. {}: {} ({orientation})",
            i + 1,
            label.dimmed(),
            drawn.card.to_string().bold()
        );
        println!("     {}", describe_asset(&revealed.asset).dimmed());
    }

    if reading.cards.len() > 1 {
        println!(
            "\n  {} of {} reversed",
            reading.reversed_count(),
            reading.cards.len()
        );
    }

    saved.map_err(|e| format!("reading drawn but not saved: {e}"))
}
