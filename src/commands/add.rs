use pa_app::AppDeps;
use pa_core::FormField;

use super::{derive_revision, submit_form};
use crate::cli::AddArgs;

pub async fn run(deps: &AppDeps, args: AddArgs) -> anyhow::Result<()> {
    let mut form = deps.form_view();
    form.initialize(None).await;

    let revision = match args.date_revision {
        Some(revision) => revision,
        None => derive_revision(&args.date_release).unwrap_or_default(),
    };

    form.set_field(FormField::Name, args.name);
    form.set_field(FormField::Description, args.description);
    form.set_field(FormField::Logo, args.logo);
    form.set_field(FormField::DateRelease, args.date_release);
    form.set_field(FormField::DateRevision, revision);
    form.check_id(args.id).await;

    submit_form(&mut form).await
}
