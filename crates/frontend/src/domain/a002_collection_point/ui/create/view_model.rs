use super::model;
use super::state::{parse_selection, CityRequest, ContactField, CreatePointState};
use crate::shared::error::ApiError;
use contracts::domain::a002_collection_point::request::CreatePointRequest;
use contracts::shared::geo::GeoPosition;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

const CREATED_MESSAGE: &str = "ponto de coleta criado";

/// ViewModel for the create-point form
#[derive(Clone, Copy)]
pub struct CreatePointViewModel {
    pub state: RwSignal<CreatePointState>,
    /// Submission failure shown above the form
    pub error: RwSignal<Option<String>>,
}

impl CreatePointViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CreatePointState::new()),
            error: RwSignal::new(None),
        }
    }

    /// Start the three independent mount-time feeds
    pub fn load(&self) {
        let state = self.state;

        spawn_local(async move {
            let result = model::current_position().await;
            state.update(|s| s.apply_initial_position(result));
        });

        spawn_local(async move {
            let result = model::fetch_items().await;
            state.update(|s| s.apply_items(result));
        });

        spawn_local(async move {
            let result = model::fetch_ufs().await;
            state.update(|s| s.apply_ufs(result));
        });
    }

    pub fn select_uf_command(&self, value: String) {
        let state = self.state;
        state.update(|s| {
            change_uf(s, &value, move |request| {
                spawn_local(async move {
                    let result = model::fetch_cities(&request.uf).await;
                    state.update(|s| {
                        s.apply_cities(&request, result);
                    });
                });
            })
        });
    }

    pub fn select_city_command(&self, value: String) {
        self.state.update(|s| s.select_city(parse_selection(&value)));
    }

    pub fn map_click_command(&self, position: GeoPosition) {
        self.state.update(|s| s.click_map(position));
    }

    /// Input change addressed by the input's `name` attribute
    pub fn input_command(&self, name: &str, value: String) {
        match ContactField::from_name(name) {
            Some(field) => self.state.update(|s| s.set_field(field, value)),
            None => log::debug!("Ignoring input for unknown field '{}'", name),
        }
    }

    pub fn toggle_item_command(&self, id: i64) {
        self.state.update(|s| s.toggle_item(id));
    }

    /// Send the point once; on success confirm and leave the page
    pub fn submit_command(&self) {
        let payload = self.state.with_untracked(|s| s.submission_payload());
        let page = PageOutcome { error: self.error };
        self.error.set(None);

        spawn_local(async move {
            submit_point(
                payload,
                |payload| async move { model::create_point(&payload).await },
                &page,
            )
            .await;
        });
    }
}

impl Default for CreatePointViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a UF select value and start the city fetch it calls for, if any
fn change_uf(state: &mut CreatePointState, value: &str, fetch: impl FnOnce(CityRequest)) {
    if let Some(request) = state.select_uf(parse_selection(value)) {
        fetch(request);
    }
}

/// Reaction of the page to a finished submission
trait SubmitOutcome {
    fn created(&self);
    fn failed(&self, message: String);
}

/// Send the payload exactly once and report the result
async fn submit_point<S, Fut>(payload: CreatePointRequest, send: S, outcome: &impl SubmitOutcome)
where
    S: FnOnce(CreatePointRequest) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let name = payload.name.clone();
    match send(payload).await {
        Ok(()) => {
            log::info!("Collection point '{}' created", name);
            outcome.created();
        }
        Err(e) => {
            log::error!("Failed to create collection point: {}", e);
            outcome.failed(format!("Erro ao cadastrar ponto de coleta: {}", e));
        }
    }
}

/// Browser side: alert + navigation on success, error banner on failure
struct PageOutcome {
    error: RwSignal<Option<String>>,
}

impl SubmitOutcome for PageOutcome {
    fn created(&self) {
        notify(CREATED_MESSAGE);
        go_home();
    }

    fn failed(&self, message: String) {
        self.error.set(Some(message));
    }
}

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Alert '{}' failed: {:?}", message, e);
        }
    }
}

fn go_home() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href("/") {
            log::error!("Navigation to / failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordedOutcome {
        created: Cell<usize>,
        failures: RefCell<Vec<String>>,
    }

    impl SubmitOutcome for RecordedOutcome {
        fn created(&self) {
            self.created.set(self.created.get() + 1);
        }

        fn failed(&self, message: String) {
            self.failures.borrow_mut().push(message);
        }
    }

    fn payload() -> CreatePointRequest {
        let mut state = CreatePointState::new();
        state.set_field(ContactField::Name, "X".to_string());
        state.select_uf(Some("SP".to_string()));
        state.toggle_item(1);
        state.submission_payload()
    }

    #[tokio::test]
    async fn test_submit_sends_once_and_confirms_on_success() {
        let sent = RefCell::new(Vec::new());
        let outcome = RecordedOutcome::default();

        submit_point(
            payload(),
            |p| {
                sent.borrow_mut().push(p);
                async { Ok(()) }
            },
            &outcome,
        )
        .await;

        assert_eq!(sent.borrow().len(), 1);
        assert_eq!(sent.borrow()[0], payload());
        assert_eq!(outcome.created.get(), 1);
        assert!(outcome.failures.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_skips_confirmation() {
        let calls = Cell::new(0);
        let outcome = RecordedOutcome::default();

        submit_point(
            payload(),
            |_| {
                calls.set(calls.get() + 1);
                async {
                    Err(ApiError::Http {
                        status: 500,
                        url: "http://localhost:3333/points".to_string(),
                    })
                }
            },
            &outcome,
        )
        .await;

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.created.get(), 0);
        assert_eq!(
            *outcome.failures.borrow(),
            vec!["Erro ao cadastrar ponto de coleta: HTTP 500 from http://localhost:3333/points"
                .to_string()]
        );
    }

    #[test]
    fn test_placeholder_uf_starts_no_city_fetch() {
        let mut state = CreatePointState::new();
        let fetched = RefCell::new(Vec::new());

        change_uf(&mut state, "0", |r| fetched.borrow_mut().push(r));

        assert!(fetched.borrow().is_empty());
        assert_eq!(state.selected_uf, None);
    }

    #[test]
    fn test_uf_change_starts_one_scoped_city_fetch() {
        let mut state = CreatePointState::new();
        let fetched = RefCell::new(Vec::new());

        change_uf(&mut state, "SP", |r| fetched.borrow_mut().push(r));
        assert_eq!(fetched.borrow().len(), 1);
        assert_eq!(fetched.borrow()[0].uf, "SP");

        // same value again is not a change
        change_uf(&mut state, "SP", |r| fetched.borrow_mut().push(r));
        assert_eq!(fetched.borrow().len(), 1);

        change_uf(&mut state, "RJ", |r| fetched.borrow_mut().push(r));
        assert_eq!(fetched.borrow().len(), 2);
        assert_eq!(fetched.borrow()[1].uf, "RJ");
    }
}
