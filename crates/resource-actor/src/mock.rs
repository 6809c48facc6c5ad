//! # Mock Client & Testing Guide
//!
//! [`MockClient`] speaks the exact channel protocol of a real actor but
//! answers each request from a queue of scripted expectations. Tests of
//! orchestration logic get deterministic, instant responses and trivial
//! error injection without spawning a single real actor.
//!
//! ## Choosing a test style
//!
//! | Concern | `MockClient` | Real actor |
//! |---------|--------------|------------|
//! | Speed | Instant | Fast, but spawns a task |
//! | Determinism | Scripted | Subject to the scheduler |
//! | State | None, expectations only | Real store |
//! | Error injection | `return_err(...)` | Needs contrived state |
//! | Tests | Logic *around* a client | The actor or whole system |
//!
//! Use a mock when the unit under test is code that *calls* a client and
//! you need to script what the far side says. Use real actors when the
//! behavior under test lives in the entity itself, or when exercising the
//! whole system end to end.
//!
//! ## Scripting responses
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Account { id: u64, email: String }
//! #[derive(Debug)] struct AccountCreate { email: String }
//! #[derive(Debug)] struct AccountUpdate;
//! #[derive(Debug)] enum AccountAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("account error")]
//! struct AccountError;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u64;
//!     type Create = AccountCreate;
//!     type Update = AccountUpdate;
//!     type Action = AccountAction;
//!     type ActionResult = ();
//!     type Filter = ();
//!     type Context = ();
//!     type Error = AccountError;
//!
//!     fn from_create_params(id: u64, params: AccountCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, email: params.email })
//!     }
//!     async fn on_update(&mut self, _: AccountUpdate, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, _: AccountAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Account>::new();
//!     mock.expect_list().return_ok(vec![1]);
//!     mock.expect_get(1).return_ok(Some(Account { id: 1, email: "a@example.com".into() }));
//!
//!     let client = mock.client();
//!     let ids = client.list(()).await.unwrap();
//!     let fetched = client.get(ids[0]).await.unwrap();
//!     assert_eq!(fetched.unwrap().email, "a@example.com");
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Injecting failures
//!
//! The hard-to-reproduce cases (a dependency that died, a store with
//! nothing in it) become one-liners:
//!
//! ```rust,ignore
//! mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//! mock.expect_list().return_ok(vec![]);
//! ```
//!
//! ## Raw channel helpers
//!
//! For tests that want to inspect the outgoing request payload itself,
//! [`create_mock_client`] hands back a client plus the receiving end of
//! its channel; the `expect_*` free functions pull one request off and
//! return its payload and responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for one expected request.
#[allow(dead_code)] // Update/Delete expectations have no builders yet
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T::Id>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A client whose far side is a queue of expectations.
///
/// Requests are answered strictly in the order the expectations were
/// registered; a request with no matching expectation panics the drain
/// task, which surfaces in the test as a dead-channel error.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _drain: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    ///
    /// Must be called from within a Tokio runtime: the drain task that
    /// answers requests is spawned here.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(64);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let drain = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("request arrived with no matching expectation");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _drain: drain,
        }
    }

    /// The client handle to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Scripts the response to the next `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<T> {
        GetExpectation {
            id,
            queue: self.expectations.clone(),
        }
    }

    /// Scripts the response to the next `create`.
    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation {
            queue: self.expectations.clone(),
        }
    }

    /// Scripts the response to the next `list`.
    pub fn expect_list(&mut self) -> ListExpectation<T> {
        ListExpectation {
            queue: self.expectations.clone(),
        }
    }

    /// Scripts the response to the next action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectation<T> {
        ActionExpectation {
            id,
            queue: self.expectations.clone(),
        }
    }

    /// Panics if any scripted expectation was never consumed.
    pub fn verify(&self) {
        let queue = self.expectations.lock().unwrap();
        if !queue.is_empty() {
            panic!("{} expectation(s) never consumed", queue.len());
        }
    }
}

pub struct GetExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.queue.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.queue.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

pub struct CreateExpectation<T: ActorEntity> {
    queue: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectation<T> {
    pub fn return_ok(self, id: T::Id) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.queue.lock().unwrap().push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

pub struct ListExpectation<T: ActorEntity> {
    queue: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ListExpectation<T> {
    pub fn return_ok(self, ids: Vec<T::Id>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(ids) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.queue.lock().unwrap().push_back(Expectation::List {
            response: Err(error),
        });
    }
}

pub struct ActionExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectation<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.queue.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.queue.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

/// A client plus the raw receiving end of its channel.
///
/// Where [`MockClient`] scripts answers ahead of time, this form lets the
/// test drive the far side by hand: receive a request, assert on its
/// payload, answer on the responder it carries.
pub fn create_mock_client<T: ActorEntity>(
    buffer: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer);
    (ResourceClient::new(sender), receiver)
}

/// Receives one request and returns it if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives one request and returns it if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives one request and returns it if it is a `List`.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<Vec<T::Id>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Receives one request and returns it if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: u64,
        label: String,
        enabled: bool,
    }

    #[derive(Debug)]
    struct GadgetCreate {
        label: String,
    }

    #[derive(Debug)]
    struct GadgetUpdate;

    #[derive(Debug)]
    enum GadgetAction {}

    #[derive(Debug)]
    enum GadgetFilter {
        Enabled,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("gadget error")]
    struct GadgetError;

    #[async_trait]
    impl ActorEntity for Gadget {
        type Id = u64;
        type Create = GadgetCreate;
        type Update = GadgetUpdate;
        type Action = GadgetAction;
        type ActionResult = ();
        type Filter = GadgetFilter;
        type Context = ();
        type Error = GadgetError;

        fn from_create_params(id: u64, params: GadgetCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
                enabled: true,
            })
        }

        fn matches(&self, filter: &GadgetFilter) -> bool {
            match filter {
                GadgetFilter::Enabled => self.enabled,
            }
        }

        async fn on_update(&mut self, _: GadgetUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: GadgetAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn scripted_expectations_are_served_in_order() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_create().return_ok(3);
        mock.expect_list().return_ok(vec![3]);
        mock.expect_get(3).return_ok(Some(Gadget {
            id: 3,
            label: "widget".to_string(),
            enabled: true,
        }));

        let client = mock.client();

        let id = client
            .create(GadgetCreate {
                label: "widget".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 3);

        let ids = client.list(GadgetFilter::Enabled).await.unwrap();
        assert_eq!(ids, vec![3]);

        let fetched = client.get(3).await.unwrap().unwrap();
        assert_eq!(fetched.label, "widget");

        mock.verify();
    }

    #[tokio::test]
    async fn scripted_error_is_returned() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let result = client.list(GadgetFilter::Enabled).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn raw_channel_exposes_request_payload() {
        let (client, mut receiver) = create_mock_client::<Gadget>(8);

        let call = tokio::spawn(async move {
            client
                .create(GadgetCreate {
                    label: "sprocket".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("create request");
        assert_eq!(params.label, "sprocket");
        responder.send(Ok(9)).unwrap();

        let id = call.await.unwrap().unwrap();
        assert_eq!(id, 9);
    }
}
