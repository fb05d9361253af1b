use std::hash::Hash;
use std::fmt::{Debug, Display};
use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Errors produced by the generic actor plumbing and entity hooks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Id carried by the creation params themselves (e.g. a SKU).
    ///
    /// Returning `None` lets the actor mint one with its id generator.
    fn natural_id(_params: &Self::CreateParams) -> Option<Self::Id> { None }

    /// Construct the full Entity from the ID and params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, FrameworkError>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), FrameworkError> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), FrameworkError>;

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, FrameworkError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    // Insertion ordered: List hands back entities in creation order.
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        // Hooks work on a copy so a rejected patch leaves the stored entity intact.
                        let mut updated = item.clone();
                        match updated.on_update(patch) {
                            Ok(()) => {
                                *item = updated.clone();
                                let _ = respond_to.send(Ok(updated));
                            }
                            Err(e) => { let _ = respond_to.send(Err(e)); }
                        }
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action);
                        let _ = respond_to.send(result);
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }
        debug!(remaining = self.store.len(), "Resource actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = T::natural_id(&params).unwrap_or_else(|| (self.next_id_fn)());
        if self.store.contains_key(&id) {
            warn!(id = %id, "Duplicate create rejected");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        let mut item = T::from_create_params(id.clone(), params)?;
        item.on_create()?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: derive would demand `T: Clone` on the client itself.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(make(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        label: String,
        punched: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        code: Option<String>,
        label: String,
    }

    #[derive(Debug)]
    struct TicketPatch {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum TicketAction {
        Punch,
    }

    impl Entity for Ticket {
        type Id = String;
        type CreateParams = TicketCreate;
        type Patch = TicketPatch;
        type Action = TicketAction;
        type ActionResult = bool;

        fn id(&self) -> &String { &self.id }

        fn natural_id(params: &TicketCreate) -> Option<String> {
            params.code.clone()
        }

        fn from_create_params(id: String, params: TicketCreate) -> Result<Self, FrameworkError> {
            if params.label.is_empty() {
                return Err(FrameworkError::Rejected("label is required".into()));
            }
            Ok(Self { id, label: params.label, punched: false })
        }

        fn on_update(&mut self, patch: TicketPatch) -> Result<(), FrameworkError> {
            if let Some(label) = patch.label {
                if label.is_empty() {
                    return Err(FrameworkError::Rejected("label is required".into()));
                }
                self.label = label;
            }
            Ok(())
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<bool, FrameworkError> {
            match action {
                TicketAction::Punch => {
                    let changed = !self.punched;
                    self.punched = true;
                    Ok(changed)
                }
            }
        }
    }

    fn spawn_actor() -> ResourceClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_generated_and_natural_ids() {
        let client = spawn_actor();

        let minted = client.create(TicketCreate { code: None, label: "Latte".into() }).await.unwrap();
        assert_eq!(minted, "ticket_1");

        let natural = client.create(TicketCreate { code: Some("T-9".into()), label: "Scone".into() }).await.unwrap();
        assert_eq!(natural, "T-9");

        let duplicate = client.create(TicketCreate { code: Some("T-9".into()), label: "Again".into() }).await;
        assert_eq!(duplicate, Err(FrameworkError::AlreadyExists("T-9".into())));
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let client = spawn_actor();
        for code in ["C", "A", "B"] {
            client.create(TicketCreate { code: Some(code.into()), label: code.into() }).await.unwrap();
        }

        let ids: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_stored_entity() {
        let client = spawn_actor();
        let id = client.create(TicketCreate { code: None, label: "Mocha".into() }).await.unwrap();

        let result = client.update(id.clone(), TicketPatch { label: Some(String::new()) }).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.label, "Mocha");
    }

    #[tokio::test]
    async fn test_actions_and_missing_ids() {
        let client = spawn_actor();
        let id = client.create(TicketCreate { code: None, label: "Tea".into() }).await.unwrap();

        assert!(client.perform_action(id.clone(), TicketAction::Punch).await.unwrap());
        assert!(!client.perform_action(id.clone(), TicketAction::Punch).await.unwrap());

        assert_eq!(client.get("nope".into()).await.unwrap(), None);
        let missing = client.perform_action("nope".into(), TicketAction::Punch).await;
        assert_eq!(missing, Err(FrameworkError::NotFound("nope".into())));
    }
}
