use anyhow::Result;

use heft_core::service::Tracker;

use super::helpers::prompt_confirm;

pub(crate) fn cmd_export(tracker: &Tracker) -> Result<()> {
    println!("{}", tracker.export_json()?);
    Ok(())
}

pub(crate) fn cmd_clear(tracker: &mut Tracker, yes: bool, json: bool) -> Result<()> {
    if !yes && !prompt_confirm("Delete all history?")? {
        if json {
            println!("{}", serde_json::json!({ "cleared": 0 }));
        } else {
            eprintln!("Nothing deleted");
        }
        return Ok(());
    }

    let cleared = tracker.clear_all()?;
    if json {
        println!("{}", serde_json::json!({ "cleared": cleared }));
    } else {
        println!("Deleted {cleared} entries");
    }
    Ok(())
}
