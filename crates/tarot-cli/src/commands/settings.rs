use super::{GlobalOpts, open_session};

pub fn show(opts: &GlobalOpts) -> Result<(), String> {
    let session = open_session(opts);
    println!("{}", session.settings());
    Ok(())
}

pub fn set(opts: &GlobalOpts, key: &str, value: &str) -> Result<(), String> {
    let mut session = open_session(opts);
    session.set_setting(key, value).map_err(|e| e.to_string())?;
    println!("{}", session.settings());
    Ok(())
}
