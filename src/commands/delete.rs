use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use pa_app::{AppDeps, ListViewModel, PromptSignal};
use pa_core::ProductId;
use tokio::sync::mpsc;

pub async fn run(deps: &AppDeps, id: String, yes: bool) -> anyhow::Result<()> {
    let id = ProductId::from(id);
    let mut list = deps.list_view();
    list.load().await;

    request(&mut list, &id)?;
    let signal = if yes {
        PromptSignal::Confirm
    } else {
        let stdin = io::stdin();
        ask(&list, &mut stdin.lock(), &mut io::stdout())?
    };
    list.handle_prompt(signal).await;

    match signal {
        PromptSignal::Cancel => println!("Cancelled"),
        PromptSignal::Confirm if list.all().iter().any(|p| p.id == id) => {
            bail!("Product {id} was not deleted")
        }
        PromptSignal::Confirm => println!("Deleted {id}"),
    }
    Ok(())
}

/// Open the pending deletion for `id`, named after the listed product.
pub fn request(list: &mut ListViewModel, id: &ProductId) -> anyhow::Result<()> {
    let name = list
        .all()
        .iter()
        .find(|p| &p.id == id)
        .map(|p| p.name.clone())
        .with_context(|| format!("No product with id {id}"))?;
    list.request_delete(id.clone(), name);
    Ok(())
}

/// Show the delete prompt and read one answer line.
pub fn ask(
    list: &ListViewModel,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<PromptSignal> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let prompt = list.delete_prompt(tx);
    write!(output, "{} [y/N] ", prompt.message())?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    if is_yes(&answer) {
        prompt.confirm();
    } else {
        prompt.cancel();
    }
    rx.try_recv().context("Confirmation prompt emitted no signal")
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
