//! `tallyai chats` -- print the past-chat catalog.

use anyhow::Result;
use console::style;

use tallyai_core::chat::catalog::ChatCatalog;

pub fn list_chats<C: ChatCatalog>(catalog: &C, json: bool) -> Result<()> {
    let chats = catalog.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&chats)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Past Chats ──").dim());
    for chat in &chats {
        println!(
            "  {:>3}  {}  {}",
            style(&chat.id).cyan(),
            style(&chat.title).bold(),
            style(chat.href()).dim()
        );
    }
    println!();

    Ok(())
}
