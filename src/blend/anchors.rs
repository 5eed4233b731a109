use std::collections::BTreeMap;

use crate::{
    foundation::core::{Position, SceneId},
    foundation::error::{FaderError, FaderResult},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One fixed point on the blend axis.
pub struct Anchor {
    /// Where the scene sits on the axis.
    pub position: Position,
    /// Scene recorded at that point.
    pub scene: SceneId,
}

impl Anchor {
    pub fn new(position: Position, scene: impl Into<SceneId>) -> Self {
        Self {
            position,
            scene: scene.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// The two anchors around a query position and the progress between them.
pub struct Bracket {
    /// Greatest anchor below the query.
    pub lower: Anchor,
    /// Least anchor above the query.
    pub upper: Anchor,
    /// Local blend factor in `[0, 1]`.
    pub factor: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Result of bracket selection.
pub enum Selection {
    /// The query sits exactly on an anchor; activate that scene directly.
    Exact(Anchor),
    /// The query falls strictly between two anchors.
    Between(Bracket),
}

/// Anchors for one blend call, sorted by position with unique positions.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSet {
    anchors: BTreeMap<Position, SceneId>,
}

impl AnchorSet {
    /// Collect anchors, rejecting duplicate positions and sets with fewer than two anchors.
    pub fn new(anchors: impl IntoIterator<Item = Anchor>) -> FaderResult<Self> {
        let mut map = BTreeMap::new();
        for anchor in anchors {
            if let Some(prev) = map.insert(anchor.position, anchor.scene.clone()) {
                return Err(FaderError::validation(format!(
                    "scenes '{prev}' and '{}' share interval {}",
                    anchor.scene, anchor.position
                )));
            }
        }
        if map.len() < 2 {
            return Err(FaderError::validation(format!(
                "at least 2 anchors are required, got {}",
                map.len()
            )));
        }
        Ok(Self { anchors: map })
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<&SceneId> {
        self.anchors.get(&position)
    }

    /// Anchors in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &SceneId)> {
        self.anchors.iter().map(|(p, s)| (*p, s))
    }

    /// Copy with both axis ends present.
    ///
    /// A missing `0` takes the scene of the lowest anchor and a missing `1` the scene
    /// of the highest one. Explicit end anchors are left untouched.
    pub fn normalized(&self) -> Self {
        let mut anchors = self.anchors.clone();
        if let Some(first) = self.anchors.values().next() {
            anchors.entry(Position::START).or_insert_with(|| first.clone());
        }
        if let Some(last) = self.anchors.values().next_back() {
            anchors.entry(Position::END).or_insert_with(|| last.clone());
        }
        Self { anchors }
    }

    /// Locate `query` on the normalized axis.
    pub fn select(&self, query: Position) -> FaderResult<Selection> {
        let axis = self.normalized();

        if let Some(scene) = axis.anchors.get(&query) {
            return Ok(Selection::Exact(Anchor::new(query, scene.clone())));
        }

        let lower = axis.anchors.range(..=query).next_back();
        let upper = axis.anchors.range(query..).next();
        let (Some((lp, ls)), Some((up, us))) = (lower, upper) else {
            return Err(FaderError::validation(format!(
                "no anchors bracket position {query}"
            )));
        };

        let factor = local_factor(*lp, *up, query)?;
        Ok(Selection::Between(Bracket {
            lower: Anchor::new(*lp, ls.clone()),
            upper: Anchor::new(*up, us.clone()),
            factor,
        }))
    }
}

/// Progress of `query` from `lower` to `upper`, clamped to `[0, 1]`.
pub fn local_factor(lower: Position, upper: Position, query: Position) -> FaderResult<f64> {
    let width = upper.get() - lower.get();
    if width <= 0.0 {
        return Err(FaderError::DegenerateBracket { position: lower });
    }
    Ok(((query.get() - lower.get()) / width).clamp(0.0, 1.0))
}

/// Free-function form of [`AnchorSet::select`].
pub fn select_bracket(anchors: &AnchorSet, query: Position) -> FaderResult<Selection> {
    anchors.select(query)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/anchors.rs"]
mod tests;
