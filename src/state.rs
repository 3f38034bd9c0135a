//! Shared application state. The store is built once at startup and cloned
//! into the router; each handler call is an independent unit of work.

use crate::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}
