//! Invocable action handlers.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use webdeck_core::error::ActionError;
use webdeck_core::types::action::Payload;

use crate::capability::{Arity, Capability, OperationSpec};

/// What a handler returns: a raw value to normalize, or a failure.
pub type HandlerOutput = Result<Value, ActionError>;

type NoArgsFn = dyn Fn() -> HandlerOutput + Send + Sync;
type PayloadFn = dyn Fn(&Payload) -> HandlerOutput + Send + Sync;

/// A handler bound to an action identifier.
///
/// The variant fixes the invocation shape at registration time, so the
/// dispatcher never inspects signatures.
#[derive(Clone)]
pub enum ActionHandler {
    /// Called with no arguments.
    NoArgs(Arc<NoArgsFn>),
    /// Called with the request payload.
    WithPayload(Arc<PayloadFn>),
}

impl ActionHandler {
    /// Wraps a zero-argument function.
    pub fn no_args<F>(f: F) -> Self
    where
        F: Fn() -> HandlerOutput + Send + Sync + 'static,
    {
        Self::NoArgs(Arc::new(f))
    }

    /// Wraps a payload-taking function.
    pub fn with_payload<F>(f: F) -> Self
    where
        F: Fn(&Payload) -> HandlerOutput + Send + Sync + 'static,
    {
        Self::WithPayload(Arc::new(f))
    }

    /// Binds one operation of a plugin capability.
    pub fn from_capability(capability: Arc<dyn Capability>, operation: &OperationSpec) -> Self {
        let name = operation.name.clone();
        match operation.arity {
            Arity::NoArgs => Self::no_args(move || capability.invoke(&name, None)),
            Arity::Payload => {
                Self::with_payload(move |payload| capability.invoke(&name, Some(payload)))
            }
        }
    }

    /// Returns the invocation shape.
    pub fn arity(&self) -> Arity {
        match self {
            Self::NoArgs(_) => Arity::NoArgs,
            Self::WithPayload(_) => Arity::Payload,
        }
    }

    /// Invokes the handler, passing `payload` only to payload-taking handlers.
    pub fn invoke(&self, payload: &Payload) -> HandlerOutput {
        match self {
            Self::NoArgs(f) => f(),
            Self::WithPayload(f) => f(payload),
        }
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandler")
            .field("arity", &self.arity())
            .field("handler", &"<fn>")
            .finish()
    }
}
