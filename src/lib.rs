//! scenefader blends between stored scenes placed on a `[0, 1]` axis.
//!
//! Given scenes anchored at positions such as `0.0`, `0.3` and `1.0`, a query position
//! picks the two anchors around it and merges their recorded entity states into one
//! synthesized snapshot.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `FadeRequest -> (AnchorSet, Position)`, rejecting bad input up front
//! 2. **Select**: `AnchorSet + Position -> Selection` (exact anchor, or a bracket and factor)
//! 3. **Merge**: two `SceneConfig`s -> `SynthesizedSnapshot`, entity by entity
//! 4. **Apply**: hand the result to a host [`StateSink`]
//!
//! Steps 2 and 3 are pure: scene lookup and device I/O live behind the
//! [`SceneResolver`] and [`StateSink`] traits.
//!
//! # Merge rules
//!
//! - Entities and attributes survive only when recorded in both scenes.
//! - Numbers blend linearly and round to whole numbers ([`Rounding`]).
//! - Other values switch from lower to upper once the factor passes `0.5`.
//! - On/off-like states stay "on" until the blend reaches the exact off anchor.
#![forbid(unsafe_code)]

mod blend;
mod fader;
mod foundation;
mod scene;
mod state;
mod value;

pub use blend::anchors::{Anchor, AnchorSet, Bracket, Selection, local_factor, select_bracket};
pub use blend::blender::{BlendOutcome, SnapshotBlender, SynthesizedSnapshot};
pub use blend::merge::Merger;
pub use fader::request::{FadeRequest, PreparedRequest, SceneInterval};
pub use fader::service::{CallContext, RecordingSink, SceneFader, SinkCall, StateSink};
pub use fader::settings::FaderSettings;
pub use foundation::core::{EntityId, Position, SceneId};
pub use foundation::error::{FaderError, FaderResult};
pub use scene::store::{SceneResolver, SceneStore};
pub use state::coerce::{CoercionError, NumericCoercion, StateTokens};
pub use state::snapshot::{SceneConfig, StateSnapshot};
pub use value::interp::{Rounding, interpolate};
pub use value::value::Value;
