use pa_app::AppDeps;

use super::render::render_page;
use crate::bootstrap::Settings;
use crate::cli::ListArgs;

pub async fn run(deps: &AppDeps, settings: &Settings, args: ListArgs) -> anyhow::Result<()> {
    let mut list = deps
        .list_view()
        .with_page_size(args.page_size.unwrap_or(settings.page_size));
    list.load().await;

    if let Some(term) = args.search {
        list.search(term);
    }
    // past the last page simply shows the last page
    while list.current_page() < args.page && list.next_page() {}

    print!("{}", render_page(&list));
    Ok(())
}
