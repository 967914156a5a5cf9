//! Interactive catalog browser.
//!
//! Plain lines are search input and go through the debouncer; lines starting
//! with `:` are commands applied immediately. While a deletion is pending
//! the next line answers the confirmation prompt.

use anyhow::Context;
use pa_app::{AppDeps, Debouncer, ListViewModel, PromptSignal};
use pa_core::{PageSize, ProductId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use super::delete::{is_yes, request};
use super::render::render_page;
use crate::bootstrap::Settings;

const HELP: &str = "\
type to search, or:
  :next           next page
  :prev           previous page
  :size 5|10|20   rows per page
  :delete ID      delete a product
  :help           this help
  :quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Search(String),
    Next,
    Prev,
    Size(PageSize),
    Delete(ProductId),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> BrowseInput {
    let Some(command) = line.trim().strip_prefix(':') else {
        return BrowseInput::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("next" | "n"), None, None) => BrowseInput::Next,
        (Some("prev" | "p"), None, None) => BrowseInput::Prev,
        (Some("size"), Some(size), None) => match size.parse() {
            Ok(size) => BrowseInput::Size(size),
            Err(_) => BrowseInput::Unknown(line.to_string()),
        },
        (Some("delete" | "d"), Some(id), None) => BrowseInput::Delete(ProductId::from(id)),
        (Some("help" | "h"), None, None) => BrowseInput::Help,
        (Some("quit" | "q"), None, None) => BrowseInput::Quit,
        _ => BrowseInput::Unknown(line.to_string()),
    }
}

pub async fn run(deps: &AppDeps, settings: &Settings) -> anyhow::Result<()> {
    let mut list = deps.list_view().with_page_size(settings.page_size);
    list.load().await;
    print!("{}", render_page(&list));
    println!("{HELP}");

    let (search_input, mut debouncer) = Debouncer::channel(settings.search_debounce);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    // flush a search typed right before end of input
                    drop(search_input);
                    if let Some(term) = debouncer.next().await {
                        list.search(term);
                        print!("{}", render_page(&list));
                    }
                    break;
                };

                if list.pending_deletion().is_some() {
                    answer_prompt(&mut list, &line).await;
                    print!("{}", render_page(&list));
                    continue;
                }

                match parse_line(&line) {
                    BrowseInput::Search(term) => {
                        if search_input.push(term).is_err() {
                            break;
                        }
                    }
                    BrowseInput::Quit => break,
                    input => apply(&mut list, input),
                }
            }
            Some(term) = debouncer.next() => {
                debug!(%term, "Applying search");
                list.search(term);
                print!("{}", render_page(&list));
            }
        }
    }
    Ok(())
}

fn apply(list: &mut ListViewModel, input: BrowseInput) {
    match input {
        BrowseInput::Next => {
            if list.next_page() {
                print!("{}", render_page(list));
            } else {
                println!("Already on the last page");
            }
        }
        BrowseInput::Prev => {
            if list.prev_page() {
                print!("{}", render_page(list));
            } else {
                println!("Already on the first page");
            }
        }
        BrowseInput::Size(size) => {
            list.set_page_size(size);
            print!("{}", render_page(list));
        }
        BrowseInput::Delete(id) => match request(list, &id) {
            Ok(()) => {
                let (tx, _rx) = mpsc::unbounded_channel();
                println!("{} [y/N]", list.delete_prompt(tx).message());
            }
            Err(err) => println!("{err}"),
        },
        BrowseInput::Help => println!("{HELP}"),
        BrowseInput::Unknown(line) => println!("Unknown command: {line} (:help lists commands)"),
        BrowseInput::Search(_) | BrowseInput::Quit => {}
    }
}

async fn answer_prompt(list: &mut ListViewModel, answer: &str) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let prompt = list.delete_prompt(tx);
    if is_yes(answer) {
        prompt.confirm();
    } else {
        prompt.cancel();
    }
    if let Ok(signal) = rx.try_recv() {
        if signal == PromptSignal::Cancel {
            println!("Cancelled");
        }
        list.handle_prompt(signal).await;
    }
}
