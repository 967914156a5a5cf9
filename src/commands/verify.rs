use anyhow::Context;
use pa_app::AppDeps;
use pa_core::ProductId;

pub async fn run(deps: &AppDeps, id: String) -> anyhow::Result<()> {
    let id = ProductId::from(id);
    let taken = deps
        .product_repo
        .exists(&id)
        .await
        .with_context(|| format!("Failed to verify id {id}"))?;

    if taken {
        println!("{id} is already taken");
    } else {
        println!("{id} is available");
    }
    Ok(())
}
