//! Cell types, per-cell effects, and the cell values stored in the grid.

pub mod registry;

use serde::{Deserialize, Serialize};

use crate::types::{CellTypeId, Pos};

pub use registry::CellTypeRegistry;

pub const WALL: &str = "wall";
pub const FLOOR: &str = "floor";
pub const EXIT: &str = "exit";

pub const UNEXPLORED_GLYPH: char = '?';

/// Something a cell does to whoever interacts with it. The grid only stores and returns
/// effects; the game layer decides what they mean for actors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellEffect {
    Message { text: String },
    Damage { amount: u32 },
    Teleport { x: i32, y: i32 },
    Transform { into: String },
    Descend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectTrigger {
    Enter,
    Touch,
    Explode,
}

/// Caller-facing definition of a cell type, as read from configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellTypeDef {
    #[serde(default)]
    pub display_name: Option<String>,
    pub glyph: char,
    #[serde(default)]
    pub solid: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub on_enter: Option<CellEffect>,
    #[serde(default)]
    pub on_touch: Option<CellEffect>,
    #[serde(default)]
    pub on_explode: Option<CellEffect>,
}

fn default_visible() -> bool {
    true
}

impl CellTypeDef {
    pub fn new(glyph: char, solid: bool) -> Self {
        Self {
            display_name: None,
            glyph,
            solid,
            visible: true,
            on_enter: None,
            on_touch: None,
            on_explode: None,
        }
    }

    pub fn named(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_owned());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_effect(mut self, trigger: EffectTrigger, effect: CellEffect) -> Self {
        match trigger {
            EffectTrigger::Enter => self.on_enter = Some(effect),
            EffectTrigger::Touch => self.on_touch = Some(effect),
            EffectTrigger::Explode => self.on_explode = Some(effect),
        }
        self
    }

    pub(crate) fn builtin_wall() -> Self {
        Self::new('#', true).named("Wall")
    }

    pub(crate) fn builtin_floor() -> Self {
        Self::new('.', false).named("Floor")
    }

    pub(crate) fn builtin_exit() -> Self {
        Self::new('>', false).named("Exit").with_effect(EffectTrigger::Enter, CellEffect::Descend)
    }
}

/// A registered cell type with every attribute resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellType {
    pub name: String,
    pub display_name: String,
    pub glyph: char,
    pub solid: bool,
    pub visible: bool,
    pub on_enter: Option<CellEffect>,
    pub on_touch: Option<CellEffect>,
    pub on_explode: Option<CellEffect>,
}

impl CellType {
    pub(crate) fn from_def(name: &str, def: CellTypeDef) -> Self {
        Self {
            name: name.to_owned(),
            display_name: def.display_name.unwrap_or_else(|| name.to_owned()),
            glyph: def.glyph,
            solid: def.solid,
            visible: def.visible,
            on_enter: def.on_enter,
            on_touch: def.on_touch,
            on_explode: def.on_explode,
        }
    }

    pub fn effect(&self, trigger: EffectTrigger) -> Option<&CellEffect> {
        match trigger {
            EffectTrigger::Enter => self.on_enter.as_ref(),
            EffectTrigger::Touch => self.on_touch.as_ref(),
            EffectTrigger::Explode => self.on_explode.as_ref(),
        }
    }

    fn effects(&self) -> impl Iterator<Item = &CellEffect> {
        [&self.on_enter, &self.on_touch, &self.on_explode].into_iter().flatten()
    }
}

/// One grid slot. Display attributes come from the cell's type; `solid` and `visible`
/// may be overridden per instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub kind: CellTypeId,
    pub explored: bool,
    pub solid: Option<bool>,
    pub visible: bool,
}

impl Cell {
    pub(crate) fn fresh(pos: Pos, kind: CellTypeId, cell_type: &CellType) -> Self {
        Self { pos, kind, explored: false, solid: None, visible: cell_type.visible }
    }

    pub fn is_solid(&self, cell_type: &CellType) -> bool {
        self.solid.unwrap_or(cell_type.solid)
    }
}

/// Per-instance overrides applied by `GridWorld::set_cell`. Unset fields keep the
/// previous explored flag and fall back to the type's defaults otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellOverrides {
    pub solid: Option<bool>,
    pub explored: Option<bool>,
    pub visible: Option<bool>,
}

impl CellOverrides {
    pub fn explored(explored: bool) -> Self {
        Self { explored: Some(explored), ..Self::default() }
    }
}
