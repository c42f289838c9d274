//! A small dependency container for proxies with scoped lifetime.
//!
//! Registration happens once at startup through the generated
//! `add_module_proxies` function. Each logical request then opens a
//! [`ServiceScope`] with its own [`ModuleRuntime`]; the scope creates each
//! proxy at most once and disposes them when it ends.

use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::errors::{InteropError, InteropResult};
use crate::runtime::ModuleRuntime;

/// Asynchronous teardown, run when the owning scope ends.
#[async_trait]
pub trait AsyncDispose: Send + Sync {
    async fn dispose(&self) -> InteropResult<()>;
}

type Factory = Arc<dyn Fn(Arc<dyn ModuleRuntime>) -> ScopedInstance + Send + Sync>;

struct Registration {
    service: &'static str,
    factory: Factory,
}

struct ScopedInstance {
    /// Holds an `Arc<I>` for the registered service type `I`.
    service: Box<dyn Any + Send + Sync>,
    disposer: Arc<dyn AsyncDispose>,
}

/// Service registrations, keyed by the service type.
#[derive(Default)]
pub struct ServiceCollection {
    registrations: IndexMap<TypeId, Registration>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `P` as the scoped implementation of service `I`.
    ///
    /// `factory` builds a fresh `P` for every scope; `upcast` turns it into
    /// the service type, typically `dyn Trait`. Registering the same service
    /// twice replaces the earlier registration.
    pub fn add_scoped<I, P>(
        &mut self,
        factory: fn(Arc<dyn ModuleRuntime>) -> P,
        upcast: fn(Arc<P>) -> Arc<I>,
    ) -> &mut Self
    where
        I: ?Sized + Send + Sync + 'static,
        P: AsyncDispose + 'static,
    {
        let make: Factory = Arc::new(move |runtime: Arc<dyn ModuleRuntime>| {
            let instance = Arc::new(factory(runtime));
            let disposer: Arc<dyn AsyncDispose> = instance.clone();
            ScopedInstance {
                service: Box::new(upcast(instance)),
                disposer,
            }
        });

        self.registrations.insert(
            TypeId::of::<I>(),
            Registration {
                service: type_name::<I>(),
                factory: make,
            },
        );
        self
    }

    pub fn contains<I: ?Sized + 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<I>())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Registered service type names, in registration order.
    pub fn service_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registrations.values().map(|registration| registration.service)
    }

    /// Freeze the registrations.
    pub fn build(self) -> ServiceProvider {
        ServiceProvider {
            registrations: Arc::new(self.registrations),
        }
    }
}

/// Frozen registrations that hand out scopes.
#[derive(Clone)]
pub struct ServiceProvider {
    registrations: Arc<IndexMap<TypeId, Registration>>,
}

impl ServiceProvider {
    /// Open a scope whose services talk to `runtime`.
    pub fn create_scope(&self, runtime: Arc<dyn ModuleRuntime>) -> ServiceScope {
        ServiceScope {
            runtime,
            registrations: Arc::clone(&self.registrations),
            instances: Mutex::new(Vec::new()),
        }
    }
}

/// One logical request: each service is created at most once per scope.
pub struct ServiceScope {
    runtime: Arc<dyn ModuleRuntime>,
    registrations: Arc<IndexMap<TypeId, Registration>>,
    /// Created services in creation order.
    instances: Mutex<Vec<(TypeId, ScopedInstance)>>,
}

impl ServiceScope {
    /// Resolve service `I`, creating it on first request within this scope.
    pub fn resolve<I>(&self) -> Option<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let id = TypeId::of::<I>();
        let registration = self.registrations.get(&id)?;

        let mut instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
        let index = match instances.iter().position(|(existing, _)| *existing == id) {
            Some(index) => index,
            None => {
                instances.push((id, (registration.factory)(Arc::clone(&self.runtime))));
                instances.len() - 1
            }
        };
        instances[index].1.service.downcast_ref::<Arc<I>>().cloned()
    }

    /// Like [`resolve`](Self::resolve), but an unregistered service is an error.
    pub fn require<I>(&self) -> InteropResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.resolve().ok_or(InteropError::NotRegistered {
            service: type_name::<I>(),
        })
    }

    /// Dispose every service created in this scope, newest first.
    ///
    /// All services are disposed even if some fail; the first failure is
    /// returned.
    pub async fn dispose(self) -> InteropResult<()> {
        let instances = self.instances.into_inner().unwrap_or_else(PoisonError::into_inner);

        let mut first_error = None;
        for (_, instance) in instances.into_iter().rev() {
            if let Err(err) = instance.disposer.dispose().await {
                log::warn!("failed to dispose scoped service: {err}");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
