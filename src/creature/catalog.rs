use std::collections::HashSet;

use super::{CreatureDef, common, spire};
use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};

static CATALOG: [CreatureDef; 8] = [
    CreatureDef {
        id: "cultist",
        display_name: "Cultist",
        background: (Color::hex(0x2a1a2a), Color::hex(0x0a050a)),
        glow: Color::hex(0xaa22aa),
        compose: common::cultist,
    },
    CreatureDef {
        id: "jawWorm",
        display_name: "Jaw Worm",
        background: (Color::hex(0x2a2a1a), Color::hex(0x0a0a05)),
        glow: Color::hex(0xaa6622),
        compose: common::jaw_worm,
    },
    CreatureDef {
        id: "louse_red",
        display_name: "Red Louse",
        background: (Color::hex(0x2a1a1a), Color::hex(0x0a0505)),
        glow: Color::hex(0xcc3322),
        compose: common::louse_red,
    },
    CreatureDef {
        id: "fungiBeast",
        display_name: "Fungi Beast",
        background: (Color::hex(0x1a2a1a), Color::hex(0x050a05)),
        glow: Color::hex(0x66aa44),
        compose: common::fungi_beast,
    },
    CreatureDef {
        id: "automaton",
        display_name: "Automaton",
        background: (Color::hex(0x2a2a2a), Color::hex(0x0a0a0a)),
        glow: Color::hex(0xff8844),
        compose: common::automaton,
    },
    CreatureDef {
        id: "mystic",
        display_name: "Mystic",
        background: (Color::hex(0x1a2a1a), Color::hex(0x050a05)),
        glow: Color::hex(0x44ff88),
        compose: spire::mystic,
    },
    CreatureDef {
        id: "sphericGuardian",
        display_name: "Spheric Guardian",
        background: (Color::hex(0x1a2a3a), Color::hex(0x050a15)),
        glow: Color::hex(0x4488ff),
        compose: spire::spheric_guardian,
    },
    CreatureDef {
        id: "bronzeOrb",
        display_name: "Bronze Orb",
        background: (Color::hex(0x2a2a2a), Color::hex(0x0a0a0a)),
        glow: Color::hex(0xff4422),
        compose: spire::bronze_orb,
    },
];

/// All built-in creatures, in generation order.
pub fn catalog() -> &'static [CreatureDef] {
    &CATALOG
}

/// Look up a built-in creature by id.
pub fn find(id: &str) -> Option<&'static CreatureDef> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Resolve a selection of ids against `defs`, keeping catalog order. Empty selects everything.
pub fn select(defs: &[CreatureDef], ids: &[String]) -> SpriteResult<Vec<CreatureDef>> {
    if ids.is_empty() {
        return Ok(defs.to_vec());
    }
    if let Some(missing) = ids.iter().find(|id| !defs.iter().any(|d| d.id == id.as_str())) {
        return Err(SpriteError::validation(format!("unknown creature '{missing}'")));
    }
    Ok(defs
        .iter()
        .filter(|d| ids.iter().any(|id| id == d.id))
        .copied()
        .collect())
}

/// Check ids are filename-safe and unique.
pub fn validate(defs: &[CreatureDef]) -> SpriteResult<()> {
    let mut seen = HashSet::with_capacity(defs.len());
    for def in defs {
        def.validate()?;
        if !seen.insert(def.id) {
            return Err(SpriteError::validation(format!(
                "duplicate creature id '{}'",
                def.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/creature/catalog.rs"]
mod tests;
