//! Product create/edit form.
//!
//! Field values are kept raw (as typed) and validated on every change. The
//! revision date rule reads the release date, so a release change re-checks
//! the revision. The id uniqueness check is asynchronous and generation
//! tagged: only the outcome of the most recent check is applied.

use std::sync::Arc;

use pa_core::form::validate_field;
use pa_core::ports::{
    ClockPort, NavigatorPort, Notice, NotifierPort, ProductRepositoryError, ProductRepositoryPort,
};
use pa_core::product::{parse_input_date, DATE_FORMAT};
use pa_core::{FieldError, FormField, Product, ProductId, Route};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    error: Option<FieldError>,
    touched: bool,
    dirty: bool,
    disabled: bool,
}

/// Request for an id uniqueness check, tagged with the generation of the
/// id value it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCheck {
    generation: u64,
    id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCheckOutcome {
    generation: u64,
    result: Result<bool, ProductRepositoryError>,
}

impl IdCheck {
    /// Ask the repository whether the id is taken.
    pub async fn run(self, repo: &dyn ProductRepositoryPort) -> IdCheckOutcome {
        let result = repo.exists(&self.id).await;
        IdCheckOutcome {
            generation: self.generation,
            result,
        }
    }
}

pub struct FormViewModel {
    repo: Arc<dyn ProductRepositoryPort>,
    notifier: Arc<dyn NotifierPort>,
    navigator: Arc<dyn NavigatorPort>,
    clock: Arc<dyn ClockPort>,
    fields: [FieldState; FormField::COUNT],
    is_edit: bool,
    submitting: bool,
    missing_record: bool,
    id_generation: u64,
    id_check_pending: bool,
}

impl FormViewModel {
    /// Empty form in create mode.
    pub fn from_ports(
        repo: Arc<dyn ProductRepositoryPort>,
        notifier: Arc<dyn NotifierPort>,
        navigator: Arc<dyn NavigatorPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let mut form = Self {
            repo,
            notifier,
            navigator,
            clock,
            fields: Default::default(),
            is_edit: false,
            submitting: false,
            missing_record: false,
            id_generation: 0,
            id_check_pending: false,
        };
        form.validate_all();
        form
    }

    pub fn repository(&self) -> Arc<dyn ProductRepositoryPort> {
        self.repo.clone()
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.field(field).value
    }

    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.field(field).error.as_ref()
    }

    /// Error worth showing: only once the user interacted with the field.
    pub fn visible_error(&self, field: FormField) -> Option<&FieldError> {
        let state = self.field(field);
        if state.touched || state.dirty {
            state.error.as_ref()
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.field(field).touched
    }

    pub fn is_dirty(&self, field: FormField) -> bool {
        self.field(field).dirty
    }

    pub fn is_disabled(&self, field: FormField) -> bool {
        self.field(field).disabled
    }

    pub fn is_edit(&self) -> bool {
        self.is_edit
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit mode was requested for an id that matched no product.
    pub fn missing_record(&self) -> bool {
        self.missing_record
    }

    pub fn is_id_check_pending(&self) -> bool {
        self.id_check_pending
    }

    /// No field error and no id check in flight.
    pub fn is_valid(&self) -> bool {
        !self.id_check_pending && self.fields.iter().all(|f| f.error.is_none())
    }

    /// Enter create mode (`None`) or edit mode for `route_id`.
    ///
    /// In edit mode the id is locked and the fields are seeded from a fresh
    /// catalog fetch. When nothing matches, the form stays empty in edit
    /// mode and [`missing_record`](Self::missing_record) is raised; the host
    /// decides what to do about it.
    #[tracing::instrument(name = "form.initialize", skip(self))]
    pub async fn initialize(&mut self, route_id: Option<&ProductId>) {
        let Some(route_id) = route_id else {
            return;
        };

        self.is_edit = true;
        self.field_mut(FormField::Id).disabled = true;
        self.id_generation += 1;
        self.id_check_pending = false;

        let found = match self.repo.list().await {
            Ok(products) => products.into_iter().find(|p| &p.id == route_id),
            Err(err) => {
                warn!(id = %route_id, error = %err, "Failed to fetch products for edit");
                None
            }
        };

        match found {
            Some(product) => {
                debug!(id = %route_id, "Seeding form from existing product");
                self.seed(&product);
            }
            None => {
                warn!(id = %route_id, "No product matches the edited id");
                self.missing_record = true;
            }
        }
        self.validate_all();
    }

    /// Update a field from user input.
    ///
    /// Disabled fields ignore input. Returns the id check to run when the id
    /// changed and passes its synchronous rules in create mode.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Option<IdCheck> {
        if self.field(field).disabled {
            debug!(%field, "Ignoring input on disabled field");
            return None;
        }

        let state = self.field_mut(field);
        state.value = value.into();
        state.dirty = true;

        self.validate(field);
        match field {
            FormField::DateRelease => {
                self.validate(FormField::DateRevision);
                None
            }
            FormField::Id => self.schedule_id_check(),
            _ => None,
        }
    }

    pub fn touch(&mut self, field: FormField) {
        self.field_mut(field).touched = true;
    }

    /// Apply the outcome of an id check. Stale outcomes (the id changed
    /// since the check was issued) are dropped; returns whether it applied.
    pub fn apply_id_check(&mut self, outcome: IdCheckOutcome) -> bool {
        if outcome.generation != self.id_generation || !self.id_check_pending {
            debug!(
                generation = outcome.generation,
                current = self.id_generation,
                "Dropping stale id check"
            );
            return false;
        }

        self.id_check_pending = false;
        let error = match outcome.result {
            Ok(true) => Some(FieldError::IdTaken),
            Ok(false) => None,
            Err(err) => {
                warn!(error = %err, "Id availability check failed");
                Some(FieldError::IdUnverified)
            }
        };
        self.field_mut(FormField::Id).error = error;
        true
    }

    /// Query the repository for an issued check without touching the form.
    pub async fn run_id_check(&self, check: IdCheck) -> IdCheckOutcome {
        check.run(self.repo.as_ref()).await
    }

    /// Type an id and wait for its uniqueness check.
    pub async fn check_id(&mut self, value: impl Into<String>) {
        if let Some(check) = self.set_field(FormField::Id, value) {
            let outcome = self.run_id_check(check).await;
            self.apply_id_check(outcome);
        }
    }

    /// Create or update the product.
    ///
    /// An invalid form is not sent; every field is marked touched instead.
    /// Returns whether the product was saved.
    #[tracing::instrument(name = "form.submit", skip(self))]
    pub async fn submit(&mut self) -> bool {
        if !self.is_valid() {
            self.mark_all_touched();
            return false;
        }
        let Some(product) = self.payload() else {
            self.mark_all_touched();
            return false;
        };

        self.submitting = true;
        let result = if self.is_edit {
            let (id, update) = product.into_update();
            self.repo.update(&id, &update).await
        } else {
            self.repo.create(&product).await
        };

        match result {
            Ok(()) => {
                info!("Product saved");
                self.notifier.notify(if self.is_edit {
                    Notice::ProductUpdated
                } else {
                    Notice::ProductCreated
                });
                self.navigator.navigate(Route::Products);
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to save product");
                self.notifier.notify(Notice::SaveFailed);
                self.submitting = false;
                false
            }
        }
    }

    /// Clear the form. Edit mode keeps the locked id.
    pub fn reset(&mut self) {
        let cleared: &[FormField] = if self.is_edit {
            &FormField::EDITABLE
        } else {
            &FormField::ALL
        };
        for &field in cleared {
            self.field_mut(field).value.clear();
        }
        for state in &mut self.fields {
            state.touched = false;
            state.dirty = false;
        }
        self.submitting = false;
        self.id_generation += 1;
        self.id_check_pending = false;
        self.validate_all();
    }

    /// Product built from the raw values, locked id included.
    fn payload(&self) -> Option<Product> {
        Some(Product {
            id: ProductId::from(self.value(FormField::Id)),
            name: self.value(FormField::Name).to_string(),
            description: self.value(FormField::Description).to_string(),
            logo: self.value(FormField::Logo).to_string(),
            date_release: parse_input_date(self.value(FormField::DateRelease))?,
            date_revision: parse_input_date(self.value(FormField::DateRevision))?,
        })
    }

    fn seed(&mut self, product: &Product) {
        let values = [
            (FormField::Id, product.id.to_string()),
            (FormField::Name, product.name.clone()),
            (FormField::Description, product.description.clone()),
            (FormField::Logo, product.logo.clone()),
            (FormField::DateRelease, product.date_release.format(DATE_FORMAT).to_string()),
            (FormField::DateRevision, product.date_revision.format(DATE_FORMAT).to_string()),
        ];
        for (field, value) in values {
            self.field_mut(field).value = value;
        }
    }

    fn schedule_id_check(&mut self) -> Option<IdCheck> {
        self.id_generation += 1;
        let state = self.field(FormField::Id);
        let checkable = !self.is_edit && !state.disabled && state.error.is_none();
        let id = ProductId::from(state.value.as_str());

        self.id_check_pending = checkable;
        checkable.then(|| IdCheck {
            generation: self.id_generation,
            id,
        })
    }

    fn validate(&mut self, field: FormField) {
        let error = if self.field(field).disabled {
            None
        } else {
            validate_field(
                field,
                self.value(field),
                self.value(FormField::DateRelease),
                self.clock.today(),
            )
            .err()
        };
        self.field_mut(field).error = error;
    }

    fn validate_all(&mut self) {
        for field in FormField::ALL {
            self.validate(field);
        }
    }

    fn mark_all_touched(&mut self) {
        for state in &mut self.fields {
            state.touched = true;
        }
    }

    fn field(&self, field: FormField) -> &FieldState {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        &mut self.fields[field.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    struct Fixture {
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn today() -> chrono::NaiveDate {
        date(2025, 1, 10)
    }

    fn form_with(repo: MockRepo) -> (FormViewModel, Fixture) {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let form = FormViewModel::from_ports(
            Arc::new(repo),
            notifier.clone(),
            navigator.clone(),
            Arc::new(FixedClock(today())),
        );
        (form, Fixture { notifier, navigator })
    }

    fn fill_valid_create(form: &mut FormViewModel) -> Option<IdCheck> {
        form.set_field(FormField::Name, "Credit card");
        form.set_field(FormField::Description, "Card for everyday purchases");
        form.set_field(FormField::Logo, "https://cdn.example.com/card.png");
        form.set_field(FormField::DateRelease, "2025-01-10");
        form.set_field(FormField::DateRevision, "2026-01-10");
        form.set_field(FormField::Id, "trj-crd")
    }

    fn existing() -> Product {
        let mut p = product("trj-crd", "Credit card", "Card for everyday purchases");
        p.date_release = date(2025, 3, 1);
        p.date_revision = date(2026, 3, 1);
        p
    }

    #[test]
    fn new_form_is_invalid_and_shows_no_errors() {
        let (form, _) = form_with(MockRepo::new());

        assert!(!form.is_edit());
        assert!(!form.is_valid());
        assert_eq!(form.error(FormField::Name), Some(&FieldError::Required));
        assert_eq!(form.visible_error(FormField::Name), None);
    }

    #[test]
    fn release_and_revision_scenario() {
        let (mut form, _) = form_with(MockRepo::new());

        form.set_field(FormField::DateRelease, "2025-01-10");
        form.set_field(FormField::DateRevision, "2026-01-10");
        assert_eq!(form.error(FormField::DateRevision), None);

        form.set_field(FormField::DateRevision, "2026-01-11");
        assert_eq!(
            form.error(FormField::DateRevision),
            Some(&FieldError::RevisionMismatch)
        );
    }

    #[test]
    fn changing_release_rechecks_revision() {
        let (mut form, _) = form_with(MockRepo::new());
        form.set_field(FormField::DateRelease, "2025-01-10");
        form.set_field(FormField::DateRevision, "2026-02-01");
        assert!(form.error(FormField::DateRevision).is_some());

        form.set_field(FormField::DateRelease, "2025-02-01");

        assert_eq!(form.error(FormField::DateRevision), None);

        form.set_field(FormField::DateRelease, "2025-02-02");
        assert_eq!(
            form.error(FormField::DateRevision),
            Some(&FieldError::RevisionMismatch)
        );
    }

    #[test]
    fn release_before_today_is_rejected() {
        let (mut form, _) = form_with(MockRepo::new());

        form.set_field(FormField::DateRelease, "2025-01-09");

        assert_eq!(
            form.visible_error(FormField::DateRelease),
            Some(&FieldError::ReleaseInPast)
        );
    }

    #[tokio::test]
    async fn available_id_makes_form_valid() {
        let mut repo = MockRepo::new();
        repo.expect_exists()
            .withf(|id| id.as_str() == "trj-crd")
            .times(1)
            .returning(|_| Ok(false));
        let (mut form, _) = form_with(repo);
        let check = fill_valid_create(&mut form).expect("id check expected");
        assert!(form.is_id_check_pending());
        assert!(!form.is_valid());

        let outcome = form.run_id_check(check).await;
        assert!(form.apply_id_check(outcome));

        assert!(!form.is_id_check_pending());
        assert!(form.is_valid());
    }

    #[tokio::test]
    async fn taken_id_is_rejected() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Ok(true));
        let (mut form, _) = form_with(repo);

        form.check_id("trj-crd").await;

        assert_eq!(form.error(FormField::Id), Some(&FieldError::IdTaken));
        assert!(!form.is_valid());
    }

    #[tokio::test]
    async fn failed_id_check_leaves_id_unverified() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Err(failure()));
        let (mut form, _) = form_with(repo);

        form.check_id("trj-crd").await;

        assert_eq!(form.error(FormField::Id), Some(&FieldError::IdUnverified));
    }

    #[tokio::test]
    async fn stale_id_check_is_dropped() {
        let mut repo = MockRepo::new();
        repo.expect_exists()
            .returning(|id| Ok(id.as_str() == "taken"));
        let (mut form, _) = form_with(repo);
        let repo = form.repository();

        let first = form.set_field(FormField::Id, "taken").unwrap();
        let second = form.set_field(FormField::Id, "free-id").unwrap();

        let second_outcome = second.run(repo.as_ref()).await;
        let first_outcome = first.run(repo.as_ref()).await;

        assert!(!form.apply_id_check(first_outcome));
        assert!(form.is_id_check_pending());
        assert!(form.apply_id_check(second_outcome));
        assert_eq!(form.error(FormField::Id), None);
    }

    #[test]
    fn id_check_carries_the_typed_id_and_latest_generation() {
        let (mut form, _) = form_with(MockRepo::new());

        let first = form.set_field(FormField::Id, "first-id").unwrap();
        let second = form.set_field(FormField::Id, "second-id").unwrap();

        assert_eq!(first.id.as_str(), "first-id");
        assert_eq!(second.id.as_str(), "second-id");
        assert!(second.generation > first.generation);
        assert!(form.is_id_check_pending());
    }

    #[test]
    fn invalid_id_after_valid_one_clears_pending_check() {
        let (mut form, _) = form_with(MockRepo::new());
        assert!(form.set_field(FormField::Id, "valid-id").is_some());

        assert!(form.set_field(FormField::Id, "no").is_none());

        assert!(!form.is_id_check_pending());
    }

    #[test]
    fn id_failing_sync_rules_is_not_checked_remotely() {
        let mut repo = MockRepo::new();
        repo.expect_exists().never();
        let (mut form, _) = form_with(repo);

        assert!(form.set_field(FormField::Id, "ab").is_none());
        assert_eq!(
            form.error(FormField::Id),
            Some(&FieldError::TooShort { min: 3 })
        );
        assert!(!form.is_id_check_pending());
    }

    #[tokio::test]
    async fn submit_invalid_form_marks_everything_touched() {
        let mut repo = MockRepo::new();
        repo.expect_create().never();
        let (mut form, fixture) = form_with(repo);
        form.set_field(FormField::Name, "Credit card");

        assert!(!form.submit().await);

        for field in FormField::ALL {
            assert!(form.is_touched(field), "{field} should be touched");
        }
        assert!(!form.is_submitting());
        assert!(fixture.notifier.notices().is_empty());
        assert!(fixture.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn submit_with_pending_id_check_is_refused() {
        let mut repo = MockRepo::new();
        repo.expect_create().never();
        let (mut form, _) = form_with(repo);
        let _pending = fill_valid_create(&mut form);

        assert!(!form.submit().await);
    }

    #[tokio::test]
    async fn create_sends_full_payload_and_navigates_to_list() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_create()
            .withf(|p| {
                p.id.as_str() == "trj-crd"
                    && p.name == "Credit card"
                    && p.date_release == date(2025, 1, 10)
                    && p.date_revision == date(2026, 1, 10)
            })
            .times(1)
            .returning(|_| Ok(()));
        let (mut form, fixture) = form_with(repo);
        fill_valid_create(&mut form);
        form.check_id("trj-crd").await;

        assert!(form.submit().await);

        assert_eq!(fixture.notifier.notices(), vec![Notice::ProductCreated]);
        assert_eq!(fixture.navigator.routes(), vec![Route::Products]);
    }

    #[tokio::test]
    async fn failed_save_keeps_values_and_clears_submitting() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|_| Err(failure()));
        let (mut form, fixture) = form_with(repo);
        fill_valid_create(&mut form);
        form.check_id("trj-crd").await;

        assert!(!form.submit().await);

        assert!(!form.is_submitting());
        assert_eq!(form.value(FormField::Name), "Credit card");
        assert_eq!(fixture.notifier.notices(), vec![Notice::SaveFailed]);
        assert!(fixture.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn edit_mode_seeds_fields_and_locks_id() {
        let mut repo = MockRepo::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![product("other", "Other one", "Another product"), existing()]));
        repo.expect_exists().never();
        let (mut form, _) = form_with(repo);

        form.initialize(Some(&ProductId::from("trj-crd"))).await;

        assert!(form.is_edit());
        assert!(form.is_disabled(FormField::Id));
        assert!(!form.missing_record());
        assert_eq!(form.value(FormField::Id), "trj-crd");
        assert_eq!(form.value(FormField::DateRelease), "2025-03-01");
        assert_eq!(form.value(FormField::DateRevision), "2026-03-01");
        assert!(form.is_valid());

        assert!(form.set_field(FormField::Id, "changed").is_none());
        assert_eq!(form.value(FormField::Id), "trj-crd");
    }

    #[tokio::test]
    async fn edit_mode_updates_without_id_in_body() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(vec![existing()]));
        repo.expect_update()
            .withf(|id, update| id.as_str() == "trj-crd" && update.name == "Renamed card")
            .times(1)
            .returning(|_, _| Ok(()));
        let (mut form, fixture) = form_with(repo);
        form.initialize(Some(&ProductId::from("trj-crd"))).await;

        form.set_field(FormField::Name, "Renamed card");
        assert!(form.submit().await);

        assert_eq!(fixture.notifier.notices(), vec![Notice::ProductUpdated]);
        assert_eq!(fixture.navigator.routes(), vec![Route::Products]);
    }

    #[tokio::test]
    async fn edit_with_unknown_id_stays_empty_in_edit_mode() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(vec![existing()]));
        let (mut form, _) = form_with(repo);

        form.initialize(Some(&ProductId::from("ghost"))).await;

        assert!(form.is_edit());
        assert!(form.missing_record());
        assert!(form.is_disabled(FormField::Id));
        assert_eq!(form.value(FormField::Name), "");
    }

    #[tokio::test]
    async fn edit_with_failed_fetch_is_treated_as_missing() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Err(failure()));
        let (mut form, _) = form_with(repo);

        form.initialize(Some(&ProductId::from("trj-crd"))).await;

        assert!(form.is_edit());
        assert!(form.missing_record());
    }

    #[tokio::test]
    async fn create_mode_initialize_does_not_fetch() {
        let mut repo = MockRepo::new();
        repo.expect_list().never();
        let (mut form, _) = form_with(repo);

        form.initialize(None).await;

        assert!(!form.is_edit());
        assert!(!form.is_disabled(FormField::Id));
    }

    #[tokio::test]
    async fn reset_in_edit_mode_keeps_id() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(vec![existing()]));
        let (mut form, _) = form_with(repo);
        form.initialize(Some(&ProductId::from("trj-crd"))).await;
        form.set_field(FormField::Name, "Changed name");
        form.touch(FormField::Name);

        form.reset();

        assert_eq!(form.value(FormField::Id), "trj-crd");
        for field in FormField::EDITABLE {
            assert_eq!(form.value(field), "", "{field} should be cleared");
            assert!(!form.is_touched(field));
            assert!(!form.is_dirty(field));
        }
        assert!(form.is_edit());
        assert!(!form.is_submitting());
    }

    #[test]
    fn reset_in_create_mode_clears_everything() {
        let (mut form, _) = form_with(MockRepo::new());
        let _ = fill_valid_create(&mut form);

        form.reset();

        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_dirty(field));
        }
        assert!(!form.is_id_check_pending());
        assert_eq!(form.error(FormField::Id), Some(&FieldError::Required));
    }

    #[tokio::test]
    async fn reset_after_successful_submit_clears_submitting() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|_| Ok(()));
        let (mut form, _) = form_with(repo);
        fill_valid_create(&mut form);
        form.check_id("trj-crd").await;

        assert!(form.submit().await);
        assert!(form.is_submitting());

        form.reset();

        assert!(!form.is_submitting());
        assert_eq!(form.value(FormField::Name), "");
    }

    #[test]
    fn id_check_issued_before_reset_is_stale() {
        let (mut form, _) = form_with(MockRepo::new());
        let check = fill_valid_create(&mut form).unwrap();

        form.reset();

        let outcome = IdCheckOutcome {
            generation: check.generation,
            result: Ok(true),
        };
        assert!(!form.apply_id_check(outcome));
        assert_eq!(form.error(FormField::Id), Some(&FieldError::Required));
    }
}
