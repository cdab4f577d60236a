//! # Core Actor Framework
//!
//! Generic building blocks for the storefront's actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait a managed resource type must implement.
//! - [`ResourceActor`]: The generic actor owning a store of entities.
//! - [`ResourceClient`]: The generic client for talking to an actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Contract a resource type must satisfy to be managed by a [`ResourceActor`].
///
/// The associated types enforce that each actor only accepts payloads meant
/// for its own resource: an Order actor cannot be handed a `ProductCreate`.
/// Writing the message loop once against this trait is what lets the Order
/// and Product actors share all of their plumbing.
///
/// # Hooks & Context
/// The async lifecycle hooks ([`ActorEntity::on_create`],
/// [`ActorEntity::on_update`], [`ActorEntity::on_delete`],
/// [`ActorEntity::handle_action`]) receive a `Context` that is injected when
/// the actor's loop starts, not when it is constructed. Dependencies created
/// after the actor (e.g. the product catalog client the order actor needs)
/// are passed to [`ResourceActor::run`]. Use `()` when no dependencies are
/// needed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g., `ReserveStock`, `Repair`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the hooks.
    type Context: Send + Sync;

    /// Construct the full entity from the generated id and the payload.
    /// Runs synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Called after the entity is constructed, before it is stored.
    /// Side effects against other actors belong here.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the standard lifecycle of a persistent resource:
/// `Create`, `Get`, `Update`, `Delete`, plus `Action` for operations that
/// don't fit the CRUD mold (stock reservation, reconciliation, repair) and
/// `List` for enumerating the store, which batch jobs such as the totals
/// audit rely on.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    #[allow(dead_code)]
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T::Id>>,
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

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the state (`store`) and the receiver
/// end of the channel. Messages are processed strictly one at a time, so a
/// mutation never observes a half-applied neighbour and no lock guards the
/// store. That sequencing is what makes a totals `Repair` safe to issue
/// concurrently: two repairs against the same order are applied one after
/// the other against the live record, never against a stale snapshot.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// `context` is handed to every entity hook. It carries dependencies
    /// that were created after the actor was instantiated but before the
    /// loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "loud_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let mut ids: Vec<T::Id> = self.store.keys().cloned().collect();
                    // Stable ordering keeps audit output reproducible.
                    ids.sort();
                    debug!(entity_type, count = ids.len(), "List");
                    let _ = respond_to.send(Ok(ids));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[allow(dead_code)]
    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T::Id>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: String,
        code: String,
        redeemed: bool,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
    }

    #[derive(Debug)]
    struct CouponUpdate {
        code: Option<String>,
    }

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = String;
        type CreateParams = CouponCreate;
        type UpdateParams = CouponUpdate;
        type Action = CouponAction;
        type ActionResult = bool;
        type Context = ();

        fn from_create_params(id: String, params: CouponCreate) -> Result<Self, String> {
            if params.code.is_empty() {
                return Err("coupon code must not be empty".to_string());
            }
            Ok(Self {
                id,
                code: params.code,
                redeemed: false,
            })
        }

        async fn on_update(
            &mut self,
            update: CouponUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), String> {
            if let Some(code) = update.code {
                self.code = code;
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CouponAction,
            _ctx: &Self::Context,
        ) -> Result<bool, String> {
            match action {
                CouponAction::Redeem => {
                    if self.redeemed {
                        Ok(false)
                    } else {
                        self.redeemed = true;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn spawn_coupon_actor() -> ResourceClient<Coupon> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("coupon_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = spawn_coupon_actor();

        // 1. Create
        let payload = CouponCreate { code: "WELCOME10".into() };
        let id: String = client.create(payload).await.unwrap();

        // 2. Redeem once
        let changed: bool = client
            .perform_action(id.clone(), CouponAction::Redeem)
            .await
            .unwrap();
        assert!(changed);

        let coupon: Coupon = client.get(id.clone()).await.unwrap().unwrap();
        assert!(coupon.redeemed);

        // 3. Second redemption is a no-op
        let changed_again: bool = client
            .perform_action(id.clone(), CouponAction::Redeem)
            .await
            .unwrap();
        assert!(!changed_again);

        // 4. Update
        let update = CouponUpdate { code: Some("WELCOME20".into()) };
        let updated = client.update(id.clone(), update).await.unwrap();
        assert_eq!(updated.code, "WELCOME20");

        // 5. Delete
        client.delete(id.clone()).await.unwrap();
        let deleted = client.get(id.clone()).await.unwrap();
        assert!(deleted.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let client = spawn_coupon_actor();

        let result = client.create(CouponCreate { code: String::new() }).await;
        assert_eq!(
            result,
            Err(FrameworkError::Custom("coupon code must not be empty".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_returns_sorted_ids() {
        let client = spawn_coupon_actor();

        for code in ["A", "B", "C"] {
            client.create(CouponCreate { code: code.into() }).await.unwrap();
        }

        let ids = client.list().await.unwrap();
        assert_eq!(ids, vec!["coupon_1", "coupon_2", "coupon_3"]);
    }
}
