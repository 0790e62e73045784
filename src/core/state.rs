//! The `State` trait shared by every behavioral state.
//!
//! A state is a plain value that names itself. Behavior that depends on
//! time or output lives with the concrete state type, not here.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for behavioral states an actor can be in.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: the actor compares states to detect a change of variant
/// - `Debug`: states appear in tracing fields
/// - `Serialize` + `Deserialize`: histories can be dumped for inspection
///
/// # Example
///
/// ```rust
/// use heroine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the state for display and logging.
    fn name(&self) -> &str;
}
