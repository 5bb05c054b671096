//! Save-state synchronization for the advisor welcome form.
//!
//! The controller tracks whether the form matches the last confirmed save,
//! validates submissions against a fixed rule set, posts valid submissions
//! and announces the outcome on a broadcast channel. Display regions
//! subscribe to that channel instead of being updated by the controller.

use std::sync::Arc;

use huxley_core::welcome::{
    FormEvent, FormSchema, RuleRegistry, SaveState, ValidationReport, WelcomeRecord,
};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::WelcomeApi;
use crate::error::ClientError;

/// Channel capacity for form events.
const CHANNEL_CAPACITY: usize = 100;

/// Input from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A form input changed.
    FieldChanged { field: String, value: String },
    /// The form was submitted.
    Submit,
}

/// Why a save did not go through.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationReport),

    #[error("save request failed: {0}")]
    Transport(#[from] ClientError),
}

/// Owns the welcome record's clean/dirty state and its save protocol.
pub struct FormSyncController {
    api: Arc<dyn WelcomeApi>,
    schema: FormSchema,
    rules: RuleRegistry,
    record: RwLock<WelcomeRecord>,
    state: watch::Sender<SaveState>,
    events: broadcast::Sender<FormEvent>,
}

impl FormSyncController {
    /// Creates a controller for the standard welcome form.
    ///
    /// `initial` is the server-rendered record; the form starts clean.
    pub fn new(api: Arc<dyn WelcomeApi>, initial: WelcomeRecord) -> Self {
        Self::with_rules(api, initial, FormSchema::welcome(), RuleRegistry::standard())
    }

    /// Creates a controller with a custom schema and rule set.
    pub fn with_rules(
        api: Arc<dyn WelcomeApi>,
        initial: WelcomeRecord,
        schema: FormSchema,
        rules: RuleRegistry,
    ) -> Self {
        let (state, _) = watch::channel(SaveState::Clean);
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            api,
            schema,
            rules,
            record: RwLock::new(initial),
            state,
            events,
        }
    }

    /// Starts listening to page input.
    ///
    /// Field changes update the record and mark it dirty; submits run
    /// [`try_save`](Self::try_save) on the current record. Each call spawns
    /// its own listener, so calling it twice with two receivers handles
    /// every event twice.
    pub fn initialize(self: &Arc<Self>, mut ui_events: mpsc::Receiver<UiEvent>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(event) = ui_events.recv().await {
                match event {
                    UiEvent::FieldChanged { field, value } => {
                        controller.field_changed(field, value).await;
                    }
                    UiEvent::Submit => {
                        if let Err(e) = controller.submit().await {
                            debug!(error = %e, "Submit not saved");
                        }
                    }
                }
            }
            debug!("UI event channel closed");
        })
    }

    /// Records a user edit and marks the form dirty.
    pub async fn field_changed(&self, field: impl Into<String>, value: impl Into<String>) {
        self.record.write().await.set(field, value);
        self.mark_dirty();
    }

    /// Moves to `dirty`. Returns true if the state changed.
    pub fn mark_dirty(&self) -> bool {
        self.transition(SaveState::Dirty)
    }

    /// Moves to `clean`. Returns true if the state changed.
    pub fn mark_clean(&self) -> bool {
        self.transition(SaveState::Clean)
    }

    fn transition(&self, next: SaveState) -> bool {
        let changed = self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
        if changed {
            debug!(state = next.indicator_class(), "Save state changed");
            let _ = self.events.send(FormEvent::state_changed(next));
        }
        changed
    }

    /// Current save state.
    pub fn state(&self) -> SaveState {
        *self.state.borrow()
    }

    /// Watches the save indicator.
    pub fn watch_state(&self) -> watch::Receiver<SaveState> {
        self.state.subscribe()
    }

    /// Subscribes to form events.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the record as last edited or confirmed.
    pub async fn record(&self) -> WelcomeRecord {
        self.record.read().await.clone()
    }

    /// Validates values without saving.
    pub fn validate(&self, values: &WelcomeRecord) -> Result<(), ValidationReport> {
        self.schema.validate(&self.rules, values)
    }

    /// Saves the current record.
    pub async fn submit(&self) -> Result<(), SaveError> {
        let values = self.record().await;
        self.try_save(values).await
    }

    /// Validates `values` and, if they pass, saves them.
    ///
    /// Invalid values are never sent and leave the state untouched. A
    /// transport failure also leaves the state untouched and is reported
    /// through [`FormEvent::SaveFailed`]. On success
    /// [`FormEvent::SaveConfirmed`] carries the saved values and the form
    /// becomes clean, unless the record was edited while the request was in
    /// flight. Those edits are kept and the form stays dirty.
    pub async fn try_save(&self, values: WelcomeRecord) -> Result<(), SaveError> {
        self.validate(&values)?;
        let base = self.record().await;

        if let Err(e) = self.api.save_welcome(&values).await {
            warn!(error = %e, "Failed to save welcome form");
            let _ = self.events.send(FormEvent::save_failed(e.to_string()));
            return Err(e.into());
        }

        info!(fields = values.len(), "Welcome form saved");
        {
            let mut record = self.record.write().await;
            if *record == base {
                *record = values.clone();
                self.mark_clean();
            } else {
                debug!("Record edited during save, staying dirty");
                record.merge_confirmed(&base, &values);
                self.mark_dirty();
            }
        }
        let _ = self.events.send(FormEvent::save_confirmed(values));
        Ok(())
    }
}

impl std::fmt::Debug for FormSyncController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSyncController")
            .field("schema", &self.schema)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use huxley_core::welcome::{fields, FieldSpec, ValidationRule};
    use tokio::sync::Semaphore;

    use super::*;
    use crate::error::Result;

    /// Records every save and fails on demand.
    #[derive(Default)]
    pub(crate) struct MockApi {
        pub(crate) fail: AtomicBool,
        pub(crate) saved: Mutex<Vec<WelcomeRecord>>,
    }

    #[async_trait]
    impl WelcomeApi for MockApi {
        async fn save_welcome(&self, record: &WelcomeRecord) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ClientError::ServerError {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    /// Holds each save until the gate hands out a permit, announcing the
    /// request as soon as it arrives.
    struct GatedApi {
        gate: Semaphore,
        started: mpsc::UnboundedSender<WelcomeRecord>,
        saved: Mutex<Vec<WelcomeRecord>>,
    }

    impl GatedApi {
        fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<WelcomeRecord>) {
            let (started, rx) = mpsc::unbounded_channel();
            let api = Arc::new(Self {
                gate: Semaphore::new(0),
                started,
                saved: Mutex::new(Vec::new()),
            });
            (api, rx)
        }
    }

    #[async_trait]
    impl WelcomeApi for GatedApi {
        async fn save_welcome(&self, record: &WelcomeRecord) -> Result<()> {
            self.started.send(record.clone()).unwrap();
            self.gate.acquire().await.unwrap().forget();
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    pub(crate) fn valid_record() -> WelcomeRecord {
        WelcomeRecord::new()
            .with(fields::FIRST_NAME, "Ada")
            .with(fields::LAST_NAME, "Lovelace")
            .with(fields::SCHOOL_NAME, "Berkeley High")
            .with(fields::PHONE, "(510) 123-4567")
    }

    fn controller(api: &Arc<MockApi>) -> FormSyncController {
        FormSyncController::new(api.clone(), valid_record())
    }

    #[tokio::test]
    async fn test_starts_clean() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);
        assert_eq!(controller.state(), SaveState::Clean);
    }

    #[tokio::test]
    async fn test_mark_dirty_only_transitions_once() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);
        let mut events = controller.subscribe();

        assert!(controller.mark_dirty());
        assert!(!controller.mark_dirty());
        assert_eq!(controller.state(), SaveState::Dirty);

        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::state_changed(SaveState::Dirty)
        );
        assert!(events.try_recv().is_err());

        assert!(controller.mark_clean());
        assert_eq!(controller.state(), SaveState::Clean);
    }

    #[tokio::test]
    async fn test_watch_state_sees_transitions() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);
        let mut indicator = controller.watch_state();

        controller.field_changed(fields::ZIP, "94720").await;
        indicator.changed().await.unwrap();
        assert_eq!(*indicator.borrow_and_update(), SaveState::Dirty);
        assert_eq!(controller.record().await.get(fields::ZIP), Some("94720"));
    }

    #[tokio::test]
    async fn test_successful_save_marks_clean_and_confirms() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);
        let mut events = controller.subscribe();

        controller.mark_dirty();
        let values = valid_record().with(fields::FIRST_NAME, "Grace");
        controller.try_save(values.clone()).await.unwrap();

        assert_eq!(controller.state(), SaveState::Clean);
        assert_eq!(controller.record().await, values);
        assert_eq!(api.saved.lock().unwrap().as_slice(), &[values.clone()]);

        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::state_changed(SaveState::Dirty)
        );
        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::state_changed(SaveState::Clean)
        );
        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::save_confirmed(values)
        );
    }

    #[tokio::test]
    async fn test_validation_failure_skips_request_and_stays_dirty() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);

        controller.mark_dirty();
        let values = valid_record().with(fields::PHONE, "510-123-4567");
        let err = controller.try_save(values).await.unwrap_err();

        match err {
            SaveError::Validation(report) => {
                assert_eq!(
                    report.message_for(fields::PHONE),
                    Some("Please enter a valid phone number.")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(api.saved.lock().unwrap().is_empty());
        assert_eq!(controller.state(), SaveState::Dirty);
    }

    #[tokio::test]
    async fn test_transport_failure_stays_dirty_and_reports() {
        let api = Arc::new(MockApi::default());
        api.fail.store(true, Ordering::SeqCst);
        let controller = controller(&api);

        controller.field_changed(fields::FIRST_NAME, "Grace").await;
        let mut events = controller.subscribe();
        let err = controller.submit().await.unwrap_err();

        assert!(matches!(err, SaveError::Transport(_)));
        assert_eq!(controller.state(), SaveState::Dirty);
        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::save_failed("Server returned 503: unavailable")
        );
    }

    #[tokio::test]
    async fn test_repeated_identical_saves_stay_clean() {
        let api = Arc::new(MockApi::default());
        let controller = controller(&api);
        let values = valid_record().with(fields::SCHOOL_NAME, "Vassar");

        controller.mark_dirty();
        controller.try_save(values.clone()).await.unwrap();
        assert_eq!(controller.state(), SaveState::Clean);

        controller.try_save(values.clone()).await.unwrap();
        assert_eq!(controller.state(), SaveState::Clean);
        assert_eq!(api.saved.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_during_save_survives_and_stays_dirty() {
        let (api, mut started) = GatedApi::new();
        let controller = Arc::new(FormSyncController::new(api.clone(), valid_record()));

        controller.field_changed(fields::FIRST_NAME, "Grace").await;
        let saving = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit().await }
        });
        let sent = started.recv().await.unwrap();
        assert_eq!(sent.get(fields::ZIP), None);

        controller.field_changed(fields::ZIP, "94720").await;
        api.gate.add_permits(1);
        saving.await.unwrap().unwrap();

        let record = controller.record().await;
        assert_eq!(record.get(fields::ZIP), Some("94720"));
        assert_eq!(record.get(fields::FIRST_NAME), Some("Grace"));
        assert_eq!(controller.state(), SaveState::Dirty);

        // The next submit sends the kept edit and settles clean.
        api.gate.add_permits(1);
        controller.submit().await.unwrap();
        assert_eq!(started.recv().await.unwrap().get(fields::ZIP), Some("94720"));
        assert_eq!(controller.state(), SaveState::Clean);
        assert_eq!(api.saved.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_overlapping_saves_keep_later_edit() {
        let (api, mut started) = GatedApi::new();
        let controller = Arc::new(FormSyncController::new(api.clone(), valid_record()));
        let spawn_submit = |controller: &Arc<FormSyncController>| {
            let controller = Arc::clone(controller);
            tokio::spawn(async move { controller.submit().await })
        };

        controller.field_changed(fields::SCHOOL_NAME, "Vassar").await;
        let first = spawn_submit(&controller);
        started.recv().await.unwrap();

        controller.field_changed(fields::ZIP, "94720").await;
        let second = spawn_submit(&controller);
        assert_eq!(started.recv().await.unwrap().get(fields::ZIP), Some("94720"));

        // Permits are handed out in arrival order, so the first save lands first.
        api.gate.add_permits(1);
        first.await.unwrap().unwrap();
        assert_eq!(controller.state(), SaveState::Dirty);
        assert_eq!(controller.record().await.get(fields::ZIP), Some("94720"));

        api.gate.add_permits(1);
        second.await.unwrap().unwrap();
        assert_eq!(controller.state(), SaveState::Clean);
        let record = controller.record().await;
        assert_eq!(record.get(fields::ZIP), Some("94720"));
        assert_eq!(record.get(fields::SCHOOL_NAME), Some("Vassar"));
        assert_eq!(api.saved.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_initialize_wires_ui_events() {
        let api = Arc::new(MockApi::default());
        let controller = Arc::new(controller(&api));
        let mut events = controller.subscribe();
        let (tx, rx) = mpsc::channel(8);
        let listener = controller.initialize(rx);

        tx.send(UiEvent::FieldChanged {
            field: fields::LAST_NAME.to_string(),
            value: "Hopper".to_string(),
        })
        .await
        .unwrap();
        tx.send(UiEvent::Submit).await.unwrap();

        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::state_changed(SaveState::Dirty)
        );
        assert_eq!(
            events.recv().await.unwrap(),
            FormEvent::state_changed(SaveState::Clean)
        );
        match events.recv().await.unwrap() {
            FormEvent::SaveConfirmed { record } => {
                assert_eq!(record.get(fields::LAST_NAME), Some("Hopper"));
            }
            other => panic!("unexpected event: {other:?}"),
        }

        drop(tx);
        listener.await.unwrap();
        assert_eq!(controller.state(), SaveState::Clean);
    }

    #[tokio::test]
    async fn test_custom_rules() {
        let api = Arc::new(MockApi::default());
        let mut rules = RuleRegistry::new();
        rules.register(ValidationRule::new("code", r"^[A-Z]{3}$", "Three letters.").unwrap());
        let schema = FormSchema::new(vec![FieldSpec::required("country").with_rule("code")]);
        let controller =
            FormSyncController::with_rules(api.clone(), WelcomeRecord::new(), schema, rules);

        let report = controller
            .validate(&WelcomeRecord::new().with("country", "usa"))
            .unwrap_err();
        assert_eq!(report.message_for("country"), Some("Three letters."));
        assert!(controller
            .validate(&WelcomeRecord::new().with("country", "USA"))
            .is_ok());
    }
}
