//! Generic entity page view model.
//!
//! Every entity page in the client is an instance of [`EntityPage`]: the same
//! fetch → list → edit-in-modal → submit → refresh cycle, parameterised by
//! the entity type, its form payload, a resource client and display metadata.
//! The per-entity pages in the original were near-identical copies of each
//! other; here the cycle exists once.
//!
//! State transitions are deliberately conservative:
//! - the list is only ever replaced wholesale after a successful fetch
//!   (no optimistic updates, no partial merges),
//! - a failed submit leaves the modal open and the edited record unchanged,
//! - deletion requires interactive confirmation before any network call,
//!   and only a confirmed successful delete triggers a re-fetch.

use crate::notify::{Confirmer, Notifier};
use hospital_api::{ReadResource as _, Resource};
use hospital_types::EntityId;
use hospital_wire::Identified;

/// Display metadata for one entity kind.
#[derive(Clone, Copy, Debug)]
pub struct EntityMeta {
    /// Lower-case singular noun ("doctor").
    pub singular: &'static str,
    /// Lower-case plural noun ("doctors").
    pub plural: &'static str,
}

/// Per-page view model state and orchestration.
///
/// Holds the in-memory list, the loading/submitting flags and the
/// currently-edited record, and delegates every mutation to the injected
/// resource client. The page never touches the network outside its methods,
/// so tests drive it with in-memory fakes.
pub struct EntityPage<E, P>
where
    E: Send,
    P: Send + Sync,
{
    meta: EntityMeta,
    resource: Box<dyn Resource<Entity = E, Payload = P>>,
    notifier: Box<dyn Notifier>,
    confirmer: Box<dyn Confirmer>,
    items: Vec<E>,
    loading: bool,
    modal_open: bool,
    editing: Option<E>,
    submitting: bool,
}

impl<E, P> EntityPage<E, P>
where
    E: Identified + Clone + Send,
    P: Send + Sync,
{
    /// Create a page with an empty list and all flags cleared.
    pub fn new(
        meta: EntityMeta,
        resource: Box<dyn Resource<Entity = E, Payload = P>>,
        notifier: Box<dyn Notifier>,
        confirmer: Box<dyn Confirmer>,
    ) -> Self {
        Self {
            meta,
            resource,
            notifier,
            confirmer,
            items: Vec::new(),
            loading: false,
            modal_open: false,
            editing: None,
            submitting: false,
        }
    }

    /// Re-fetch the list and replace `items` wholesale.
    ///
    /// On failure the previous list is kept (stale but consistent), the
    /// error is logged and the user is notified. The loading flag is cleared
    /// on both paths.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.resource.list().await {
            Ok(items) => {
                self.items = items;
            }
            Err(err) => {
                tracing::error!("failed to load {}: {}", self.meta.plural, err);
                self.notifier
                    .error(&format!("Failed to load the {} list", self.meta.singular));
            }
        }
        self.loading = false;
    }

    /// Open the modal for creating a new record.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.modal_open = true;
    }

    /// Open the modal pre-filled from an existing record.
    pub fn open_edit(&mut self, item: E) {
        self.editing = Some(item);
        self.modal_open = true;
    }

    /// Close the modal and forget the edited record.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.editing = None;
    }

    /// Submit a validated payload.
    ///
    /// Calls `update` with the edited record's id when the modal was opened
    /// for editing, `create` otherwise. On success the modal closes and the
    /// list is re-fetched once; on failure the modal stays open with the
    /// edited record unchanged. The submitting flag gates re-entrant
    /// submissions and is cleared on both paths.
    pub async fn submit(&mut self, payload: P) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        let editing_id = self.editing.as_ref().map(|item| item.id());
        let result = match editing_id {
            Some(id) => self.resource.update(id, &payload).await.map(|_| ()),
            None => self.resource.create(&payload).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                let verb = if editing_id.is_some() {
                    "updated"
                } else {
                    "created"
                };
                self.notifier
                    .success(&format!("{} {} successfully", self.meta.singular, verb));
                self.close_modal();
                self.submitting = false;
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!("failed to save {}: {}", self.meta.singular, err);
                self.notifier
                    .error(&format!("Failed to save the {}", self.meta.singular));
                self.submitting = false;
            }
        }
    }

    /// Delete a record after interactive confirmation.
    ///
    /// Without confirmation this performs zero network calls. A successful
    /// delete notifies and re-fetches the list; a failed delete notifies and
    /// leaves the (stale) list untouched.
    pub async fn remove(&mut self, id: EntityId) {
        let prompt = format!("Delete this {}?", self.meta.singular);
        if !self.confirmer.confirm(&prompt) {
            return;
        }

        match self.resource.delete(id).await {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} deleted successfully", self.meta.singular));
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!("failed to delete {}: {}", self.meta.singular, err);
                self.notifier
                    .error(&format!("Failed to delete the {}", self.meta.singular));
            }
        }
    }

    /// The current in-memory list, in response order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The record the modal is editing, if any.
    pub fn editing(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Display metadata for rendering.
    pub fn meta(&self) -> EntityMeta {
        self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ConsultationForm;
    use async_trait::async_trait;
    use hospital_api::{ApiError, ApiResult};
    use hospital_api::ReadResource;
    use hospital_wire::{Doctor, DoctorPayload, Specialty, SpecialtyRef};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Get(EntityId),
        Create,
        Update(EntityId),
        Delete(EntityId),
    }

    /// In-memory resource with scripted list responses and recorded calls.
    struct ScriptedResource {
        lists: Mutex<VecDeque<Vec<Doctor>>>,
        calls: Arc<Mutex<Vec<Call>>>,
        fail_mutations: bool,
    }

    impl ScriptedResource {
        fn new(lists: Vec<Vec<Doctor>>, calls: Arc<Mutex<Vec<Call>>>) -> Self {
            Self {
                lists: Mutex::new(lists.into()),
                calls,
                fail_mutations: false,
            }
        }

        fn failing(lists: Vec<Vec<Doctor>>, calls: Arc<Mutex<Vec<Call>>>) -> Self {
            Self {
                lists: Mutex::new(lists.into()),
                calls,
                fail_mutations: true,
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn rejected() -> ApiError {
            ApiError::Rejected {
                status: 500,
                path: "/doctores".into(),
            }
        }
    }

    #[async_trait]
    impl ReadResource for ScriptedResource {
        type Entity = Doctor;

        async fn list(&self) -> ApiResult<Vec<Doctor>> {
            self.record(Call::List);
            match self.lists.lock().unwrap().pop_front() {
                Some(items) => Ok(items),
                None => Err(Self::rejected()),
            }
        }

        async fn get(&self, id: EntityId) -> ApiResult<Doctor> {
            self.record(Call::Get(id));
            Err(ApiError::NotFound {
                path: format!("/doctores/{id}"),
            })
        }
    }

    #[async_trait]
    impl Resource for ScriptedResource {
        type Payload = DoctorPayload;

        async fn create(&self, _payload: &DoctorPayload) -> ApiResult<Doctor> {
            self.record(Call::Create);
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            Ok(doctor(100))
        }

        async fn update(&self, id: EntityId, _payload: &DoctorPayload) -> ApiResult<Doctor> {
            self.record(Call::Update(id));
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            Ok(doctor(id.value()))
        }

        async fn delete(&self, id: EntityId) -> ApiResult<()> {
            self.record(Call::Delete(id));
            if self.fail_mutations {
                return Err(Self::rejected());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages.lock().unwrap().push(format!("ok: {message}"));
        }

        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(format!("err: {message}"));
        }
    }

    struct ScriptedConfirmer {
        answer: bool,
        asked: Arc<Mutex<usize>>,
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&self, _prompt: &str) -> bool {
            *self.asked.lock().unwrap() += 1;
            self.answer
        }
    }

    fn doctor(id: i32) -> Doctor {
        Doctor {
            id: EntityId(id),
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            phone: "0999999999".into(),
            specialty: Specialty {
                id: EntityId(2),
                name: "Cardiología".into(),
            },
        }
    }

    fn payload() -> DoctorPayload {
        DoctorPayload {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            phone: "0999999999".into(),
            specialty: SpecialtyRef { id: EntityId(2) },
        }
    }

    const META: EntityMeta = EntityMeta {
        singular: "doctor",
        plural: "doctors",
    };

    struct Harness {
        page: EntityPage<Doctor, DoctorPayload>,
        calls: Arc<Mutex<Vec<Call>>>,
        messages: Arc<Mutex<Vec<String>>>,
        asked: Arc<Mutex<usize>>,
    }

    fn harness(lists: Vec<Vec<Doctor>>, fail_mutations: bool, confirm: bool) -> Harness {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let resource = if fail_mutations {
            ScriptedResource::failing(lists, calls.clone())
        } else {
            ScriptedResource::new(lists, calls.clone())
        };

        let messages = Arc::new(Mutex::new(Vec::new()));
        let notifier = RecordingNotifier {
            messages: messages.clone(),
        };

        let asked = Arc::new(Mutex::new(0));
        let confirmer = ScriptedConfirmer {
            answer: confirm,
            asked: asked.clone(),
        };

        Harness {
            page: EntityPage::new(META, Box::new(resource), Box::new(notifier), Box::new(confirmer)),
            calls,
            messages,
            asked,
        }
    }

    #[tokio::test]
    async fn refresh_replaces_items_in_response_order() {
        let mut h = harness(vec![vec![doctor(2), doctor(1)]], false, true);
        h.page.refresh().await;

        let ids: Vec<i32> = h.page.items().iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(!h.page.is_loading());
    }

    #[tokio::test]
    async fn refresh_failure_keeps_stale_items_and_notifies() {
        // First list succeeds, second is exhausted and fails.
        let mut h = harness(vec![vec![doctor(1)]], false, true);
        h.page.refresh().await;
        h.page.refresh().await;

        assert_eq!(h.page.items().len(), 1);
        assert!(!h.page.is_loading());
        let messages = h.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("err:"));
    }

    #[tokio::test]
    async fn create_flow_calls_create_then_exactly_one_refresh() {
        let mut h = harness(vec![vec![doctor(100)]], false, true);
        h.page.open_create();
        assert!(h.page.is_modal_open());

        h.page.submit(payload()).await;

        assert_eq!(
            *h.calls.lock().unwrap(),
            vec![Call::Create, Call::List],
            "create must never call update, and success triggers one refresh"
        );
        assert!(!h.page.is_modal_open());
        assert!(!h.page.is_submitting());
    }

    #[tokio::test]
    async fn edit_flow_updates_with_the_edited_records_id() {
        let mut h = harness(vec![vec![doctor(5)]], false, true);
        h.page.open_edit(doctor(5));

        h.page.submit(payload()).await;

        assert_eq!(
            *h.calls.lock().unwrap(),
            vec![Call::Update(EntityId(5)), Call::List]
        );
        assert!(h.page.editing().is_none());
    }

    #[tokio::test]
    async fn failed_submit_leaves_modal_open_and_editing_unchanged() {
        let mut h = harness(vec![], true, true);
        h.page.open_edit(doctor(5));

        h.page.submit(payload()).await;

        assert_eq!(*h.calls.lock().unwrap(), vec![Call::Update(EntityId(5))]);
        assert!(h.page.is_modal_open());
        assert_eq!(h.page.editing().map(|d| d.id), Some(EntityId(5)));
        assert!(!h.page.is_submitting());
    }

    #[tokio::test]
    async fn unconfirmed_remove_performs_zero_network_calls() {
        let mut h = harness(vec![], false, false);
        h.page.remove(EntityId(1)).await;

        assert_eq!(*h.asked.lock().unwrap(), 1);
        assert!(h.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirmed_remove_deletes_then_refreshes_once() {
        let mut h = harness(vec![vec![]], false, true);
        h.page.remove(EntityId(1)).await;

        assert_eq!(
            *h.calls.lock().unwrap(),
            vec![Call::Delete(EntityId(1)), Call::List]
        );
    }

    #[tokio::test]
    async fn failed_delete_triggers_zero_refreshes() {
        let mut h = harness(vec![vec![]], true, true);
        h.page.remove(EntityId(1)).await;

        assert_eq!(*h.calls.lock().unwrap(), vec![Call::Delete(EntityId(1))]);
        let messages = h.messages.lock().unwrap();
        assert!(messages.iter().any(|m| m.starts_with("err:")));
    }

    #[tokio::test]
    async fn delete_then_refresh_yields_the_empty_state() {
        // List starts with one record; after the delete the backend returns [].
        let mut h = harness(vec![vec![doctor(1)], vec![]], false, true);
        h.page.refresh().await;
        assert_eq!(h.page.items().len(), 1);

        h.page.remove(EntityId(1)).await;

        assert!(h.page.items().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let mut h = harness(vec![], false, true);
        h.page.open_create();

        let form = ConsultationForm {
            date: "2024-05-01T10:30".into(),
            reason: "   ".into(),
            patient_id: Some(EntityId(3)),
            doctor_id: Some(EntityId(5)),
        };

        // Validation fails before submit is ever called; the page sees nothing.
        assert!(form.validate().is_err());
        assert!(h.calls.lock().unwrap().is_empty());
    }
}
