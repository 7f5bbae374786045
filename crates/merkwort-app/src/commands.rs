use std::sync::Arc;

use kanal::AsyncReceiver;
use merkwort_core::{DeleteError, DeleteOutcome, WordListPipeline};
use merkwort_types::{DisplayItem, UndoEvent, WordCategory};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Commands accepted on stdin.
enum Command {
    Search(String),
    Delete(WordCategory, u64),
    Undo,
    List,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        match parts.next()? {
            "search" => Some(Command::Search(
                line.trim().strip_prefix("search").unwrap_or("").trim().to_string(),
            )),
            "delete" => {
                let category = parts.next()?.parse().ok()?;
                let id = parts.next()?.parse().ok()?;
                Some(Command::Delete(category, id))
            }
            "undo" => Some(Command::Undo),
            "list" => Some(Command::List),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Reads commands from stdin until EOF, quit, or cancellation.
pub async fn input_loop(
    pipeline: Arc<WordListPipeline>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let undo_rx: AsyncReceiver<UndoEvent> = pipeline.undo_events();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Some(Command::Search(text)) => pipeline.set_search_query(text),
                    Some(Command::Delete(category, id)) => {
                        delete(&pipeline, category, id).await;
                    }
                    Some(Command::Undo) => match undo_rx.try_recv()? {
                        Some(event) => {
                            let category = event.category();
                            let id = event.id();
                            match pipeline.accept_undo(event).await {
                                Ok(()) => println!("restored {category} #{id}"),
                                Err(err) => tracing::error!(%err, "undo failed"),
                            }
                        }
                        None => println!("nothing to undo"),
                    },
                    Some(Command::List) => render(&pipeline.display_list()),
                    Some(Command::Help) => print_help(),
                    Some(Command::Quit) => {
                        cancel.cancel();
                        break;
                    }
                    None => {
                        if !line.trim().is_empty() {
                            println!("unknown command, try 'help'");
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

async fn delete(pipeline: &WordListPipeline, category: WordCategory, id: u64) {
    let item = pipeline
        .display_list()
        .borrow()
        .iter()
        .find(|item| item.category() == category && item.id() == id)
        .cloned();
    let Some(item) = item else {
        println!("no {category} #{id} in the current list");
        return;
    };

    match pipeline.request_delete(&item).await {
        Ok(DeleteOutcome::Removed) => {
            println!("deleted {category} #{id} ({}), type 'undo' to restore", item.word());
        }
        Ok(DeleteOutcome::AlreadyGone) => {
            // Vanished concurrently; completed silently.
            tracing::debug!(%category, id, "delete target already gone");
        }
        Err(err @ DeleteError::PartialDelete { .. }) => {
            // Data-consistency error, must be shown, not swallowed.
            tracing::error!(%err, "inconsistent delete");
            println!("delete left inconsistent data: {err}");
        }
        Err(err) => tracing::error!(%err, "delete failed"),
    }
}

/// Republishes the rendered list whenever the pipeline emits a new one.
pub async fn list_loop(
    mut list_rx: watch::Receiver<Vec<DisplayItem>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        {
            let list = list_rx.borrow_and_update();
            render_items(&list);
        }
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            changed = list_rx.changed() => if changed.is_err() { break },
        }
    }
    Ok(())
}

fn render(list_rx: &watch::Receiver<Vec<DisplayItem>>) {
    render_items(&list_rx.borrow());
}

fn render_items(items: &[DisplayItem]) {
    println!("-- {} words --", items.len());
    for item in items {
        match item {
            DisplayItem::Noun {
                id,
                word,
                translation,
                gender,
            } => println!("  noun #{id}: {gender} {word} = {translation}"),
            DisplayItem::Verb {
                id,
                word,
                translation,
                praeteritum,
                perfekt,
            } => println!("  verb #{id}: {word} = {translation} ({praeteritum}; {perfekt})"),
            DisplayItem::Adjective {
                id,
                word,
                translation,
                komparativ,
                superlativ,
            } => println!(
                "  adj  #{id}: {word} = {translation} ({}; {})",
                komparativ.as_deref().unwrap_or("-"),
                superlativ.as_deref().unwrap_or("-")
            ),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  search <text>          filter the list (empty text clears)");
    println!("  delete <category> <id> remove a word (noun|verb|adjective)");
    println!("  undo                   restore the oldest pending deletion");
    println!("  list                   print the current list");
    println!("  quit                   exit");
}
