use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u64,
    title: String,
    open: bool,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    title: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug)]
enum TicketFilter {
    Open,
    Any,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u64;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = bool;
    type Filter = TicketFilter;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: params.title,
            open: true,
        })
    }

    fn matches(&self, filter: &TicketFilter) -> bool {
        match filter {
            TicketFilter::Open => self.open,
            TicketFilter::Any => true,
        }
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Close => {
                if self.open {
                    self.open = false;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn full_lifecycle_roundtrip() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // Create: first id is 1
    let id = client
        .create(TicketCreate {
            title: "leaky faucet".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // List: a fresh ticket is open
    let open = client.list(TicketFilter::Open).await.unwrap();
    assert_eq!(open, vec![1]);

    // Action: close once, then report no change
    let changed = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(changed);
    let changed_again = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(!changed_again);

    // A closed ticket drops out of the Open listing but not Any
    let open = client.list(TicketFilter::Open).await.unwrap();
    assert!(open.is_empty());
    let all = client.list(TicketFilter::Any).await.unwrap();
    assert_eq!(all, vec![1]);

    // Update
    let updated = client
        .update(
            id,
            TicketUpdate {
                title: Some("leaky faucet in unit 4".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "leaky faucet in unit 4");

    // Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_assigned_sequentially() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for expected in 1..=3u64 {
        let id = client
            .create(TicketCreate {
                title: format!("ticket {}", expected),
            })
            .await
            .unwrap();
        assert_eq!(id, expected);
    }
}

#[tokio::test]
async fn missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let get = client.get(99).await.unwrap();
    assert!(get.is_none());

    let update = client.update(99, TicketUpdate { title: None }).await;
    assert!(matches!(update, Err(FrameworkError::NotFound(_))));

    let action = client.perform_action(99, TicketAction::Close).await;
    assert!(matches!(action, Err(FrameworkError::NotFound(_))));

    let delete = client.delete(99).await;
    assert!(matches!(delete, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn rejected_create_stores_nothing() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(TicketCreate { title: "".into() }).await;
    assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));

    let all = client.list(TicketFilter::Any).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn dropped_clients_stop_the_actor() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run(()));

    client
        .create(TicketCreate {
            title: "last one".into(),
        })
        .await
        .unwrap();

    drop(client);
    handle.await.unwrap();
}
