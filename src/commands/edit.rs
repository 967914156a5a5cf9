use anyhow::bail;
use pa_app::AppDeps;
use pa_core::{FormField, ProductId};

use super::{derive_revision, submit_form};
use crate::cli::EditArgs;

pub async fn run(deps: &AppDeps, args: EditArgs) -> anyhow::Result<()> {
    let id = ProductId::from(args.id);
    let mut form = deps.form_view();
    form.initialize(Some(&id)).await;
    if form.missing_record() {
        bail!("No product with id {id}");
    }

    let text_fields = [
        (FormField::Name, args.name),
        (FormField::Description, args.description),
        (FormField::Logo, args.logo),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }

    // a new release date drags the revision along unless both are given
    let revision = match (&args.date_release, args.date_revision) {
        (_, Some(revision)) => Some(revision),
        (Some(release), None) => derive_revision(release),
        (None, None) => None,
    };
    if let Some(release) = args.date_release {
        form.set_field(FormField::DateRelease, release);
    }
    if let Some(revision) = revision {
        form.set_field(FormField::DateRevision, revision);
    }

    submit_form(&mut form).await
}
