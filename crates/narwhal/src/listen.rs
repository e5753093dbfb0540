//! Change notification: events, listener traits and [`ListenableGraph`].
//!
//! Views and indices stay consistent with a graph by registering as listeners on it.
//! Registration hands back a [`ListenerHandle`]; removing the handle cancels delivery.
//! Delivery is synchronous and must not re-enter the graph that is being mutated.

mod event;
mod listenable;

pub use event::{
    ChangeKind, GraphEdgeChangeEvent, GraphId, GraphListener, GraphVertexChangeEvent,
    Listenable, ListenerHandle, SharedGraphListener, SharedVertexSetListener,
    VertexSetListener,
};
pub use listenable::ListenableGraph;
